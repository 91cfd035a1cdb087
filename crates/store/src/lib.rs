//! Repositories over DynamoDB for the check-in system.
//!
//! Every repository talks to the store through [`dynamodb::DynamoBackend`],
//! which has two implementations:
//!
//! - [`dynamodb::SdkBackend`]: the real store, via `aws-sdk-dynamodb`
//! - [`inmemory::MockBackend`]: an in-memory table set for tests and local
//!   development
//!
//! Repositories are obtained from a [`StoreContext`], which is built once from
//! a [`StoreConfig`] and cloned wherever it is needed.
//!
//! # Example
//!
//! ```rust,ignore
//! use checkin_core::storage::TraineeRepository;
//! use checkin_store::{StoreConfig, StoreContext};
//!
//! let context = StoreContext::connect(StoreConfig::from_env()).await;
//! let trainee = context.trainees().find_by_email("robert.martinez@example.com").await?;
//! ```

pub mod config;
pub mod context;
pub mod dynamodb;
pub mod inmemory;

pub use config::StoreConfig;
pub use context::StoreContext;
