//! In-memory storage backend for testing.
//!
//! [`MockBackend`] implements [`DynamoBackend`](crate::dynamodb::DynamoBackend)
//! over tables held in memory. Writes are applied and filters are evaluated,
//! so repository round trips behave as they would against DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use checkin_store::inmemory::MockBackend;
//! use checkin_store::{StoreConfig, StoreContext};
//!
//! let backend = MockBackend::with_trainee_fixtures("trainees_dev")?;
//! let context = StoreContext::new(Arc::new(backend), StoreConfig::for_environment("dev"));
//! ```

mod backend;

pub use backend::{MockBackend, Operation};
