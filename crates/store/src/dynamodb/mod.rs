//! DynamoDB storage.
//!
//! [`DynamoRepository`] implements the repository traits from
//! `checkin_core::storage` for any [`Entity`](checkin_core::storage::Entity)
//! on top of a [`DynamoBackend`].

mod backend;
pub mod conversions;
mod error;
mod filter;
pub mod keys;
mod repository;
mod sdk;
mod trainee;

pub use backend::{DynamoBackend, Item};
pub use error::{BackendError, Result};
pub use filter::{Filter, FilterExpression};
pub use repository::DynamoRepository;
pub use sdk::SdkBackend;
