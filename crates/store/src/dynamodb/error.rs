//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to [`BackendError`], one function per operation.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use thiserror::Error;

/// Failure reported by a [`DynamoBackend`](super::DynamoBackend).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("table {0} not found")]
    TableNotFound(String),

    #[error("{0}, please retry")]
    Throttled(String),

    #[error("conditional check failed")]
    ConditionFailed,

    #[error("DynamoDB error: {0}")]
    Service(String),

    #[error("malformed item: {0}")]
    Codec(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

fn throughput_exceeded() -> BackendError {
    BackendError::Throttled("Throughput exceeded".to_string())
}

fn request_limit_exceeded() -> BackendError {
    BackendError::Throttled("Request limit exceeded".to_string())
}

fn internal_server_error() -> BackendError {
    BackendError::Service("DynamoDB internal server error".to_string())
}

/// Map a GetItem SDK error to BackendError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table: &str,
) -> BackendError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        GetItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        GetItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        GetItemError::InternalServerError(_) => internal_server_error(),
        err => BackendError::Service(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to BackendError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table: &str,
) -> BackendError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        ScanError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        ScanError::RequestLimitExceeded(_) => request_limit_exceeded(),
        ScanError::InternalServerError(_) => internal_server_error(),
        err => BackendError::Service(format!("Scan failed: {:?}", err)),
    }
}

/// Map a Query SDK error to BackendError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
    table: &str,
) -> BackendError {
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        QueryError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        QueryError::RequestLimitExceeded(_) => request_limit_exceeded(),
        QueryError::InternalServerError(_) => internal_server_error(),
        err => BackendError::Service(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to BackendError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table: &str,
) -> BackendError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => BackendError::ConditionFailed,
        PutItemError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        PutItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        PutItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        PutItemError::InternalServerError(_) => internal_server_error(),
        err => BackendError::Service(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to BackendError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    table: &str,
) -> BackendError {
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => BackendError::ConditionFailed,
        UpdateItemError::ResourceNotFoundException(_) => {
            BackendError::TableNotFound(table.to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        UpdateItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        UpdateItemError::InternalServerError(_) => internal_server_error(),
        err => BackendError::Service(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to BackendError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table: &str,
) -> BackendError {
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => BackendError::ConditionFailed,
        DeleteItemError::ResourceNotFoundException(_) => {
            BackendError::TableNotFound(table.to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        DeleteItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        DeleteItemError::InternalServerError(_) => internal_server_error(),
        err => BackendError::Service(format!("DeleteItem failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        assert_eq!(
            BackendError::TableNotFound("trainees_dev".to_string()).to_string(),
            "table trainees_dev not found"
        );
        assert_eq!(
            throughput_exceeded().to_string(),
            "Throughput exceeded, please retry"
        );
        assert_eq!(
            BackendError::Codec("missing id".to_string()).to_string(),
            "malformed item: missing id"
        );
    }
}
