use thiserror::Error;

use super::Scope;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A keyed or filtered lookup matched no item.
    #[error("{entity_type} not found: {criteria}")]
    NotFound {
        entity_type: &'static str,
        criteria: String,
    },
    /// An update targeted an id that has no stored item.
    #[error("{entity_type} {id} does not exist")]
    Precondition {
        entity_type: &'static str,
        id: String,
    },
    /// The backing store rejected or failed the call.
    #[error("{operation}: {message}")]
    Backend { operation: String, message: String },
    /// A record and its stored attributes disagree on shape.
    #[error("Codec error: {0}")]
    Codec(String),
    #[error("{entity_type} cannot be listed by {scope}")]
    UnsupportedScope {
        entity_type: &'static str,
        scope: Scope,
    },
}

impl RepositoryError {
    /// Builds a `NotFound` error for the given entity and lookup criteria.
    pub fn not_found(entity_type: &'static str, criteria: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            criteria: criteria.into(),
        }
    }

    /// Wraps a backend failure with the operation that was being attempted.
    pub fn backend(operation: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Backend {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
