use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use checkin_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

use crate::json::error_json;

/// Errors returned by the toolkit helpers.
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("empty string not allowed")]
    EmptySlugInput,

    #[error("after removing characters slug is zero length")]
    EmptySlug,

    #[error("body must not be larger than {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("body contains badly-formed JSON (at line {line}, column {column})")]
    MalformedJson { line: usize, column: usize },

    #[error("body contains badly-formed JSON")]
    TruncatedJson,

    #[error("body contains an incorrect JSON type: {0}")]
    IncorrectJsonType(String),

    #[error("body contains unknown key \"{0}\"")]
    UnknownField(String),

    #[error("body must not be empty")]
    EmptyBody,

    #[error("body must contain only one JSON object")]
    TrailingData,

    #[error("the uploaded file is too large (limit {limit} bytes)")]
    FileTooLarge { limit: usize },

    #[error("file type not allowed: {0}")]
    FileTypeNotAllowed(String),

    #[error("no file was uploaded")]
    NoFile,

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("multipart error: {0}")]
    Multipart(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolkitError {
    /// HTTP status a handler should answer with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } | Self::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::FileTypeNotAllowed(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::EmptySlugInput
            | Self::EmptySlug
            | Self::MalformedJson { .. }
            | Self::TruncatedJson
            | Self::IncorrectJsonType(_)
            | Self::UnknownField(_)
            | Self::EmptyBody
            | Self::TrailingData
            | Self::NoFile
            | Self::InvalidPath(_)
            | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            Self::Http(_) => StatusCode::BAD_GATEWAY,
            Self::Json(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type for toolkit helpers.
pub type Result<T> = std::result::Result<T, ToolkitError>;

impl IntoResponse for ToolkitError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error_json(&self, Some(status))
    }
}

/// Handler error that renders as a [`JsonResponse`](crate::JsonResponse).
///
/// The status comes from the wrapped error when it is a [`RepositoryError`] or
/// a [`ToolkitError`]; anything else is a 500.
pub struct ApiError(pub anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if let Some(toolkit_error) = self.0.downcast_ref::<ToolkitError>() {
            toolkit_error.status_code()
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        error_json(&self.0, Some(status))
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
