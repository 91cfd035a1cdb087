//! JSON request and response helpers.

use std::fmt::Display;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::{Result, ToolkitError};

/// Body size limit for [`read_json`] when none is given (1 MiB).
pub const DEFAULT_MAX_JSON_SIZE: usize = 1024 * 1024;

/// Envelope for JSON API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse<T = serde_json::Value> {
    pub error: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Decode a request body holding exactly one JSON value.
///
/// Bodies larger than `max_bytes` (default [`DEFAULT_MAX_JSON_SIZE`]) are
/// rejected before parsing.
///
/// Unknown keys are accepted by default, as serde does. Mark `T` with
/// `#[serde(deny_unknown_fields)]` to reject them with
/// [`ToolkitError::UnknownField`].
pub fn read_json<T: DeserializeOwned>(body: &[u8], max_bytes: Option<usize>) -> Result<T> {
    let limit = max_bytes.unwrap_or(DEFAULT_MAX_JSON_SIZE);
    if body.len() > limit {
        return Err(ToolkitError::BodyTooLarge { limit });
    }

    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = T::deserialize(&mut deserializer).map_err(|e| classify(e, body))?;
    deserializer.end().map_err(|_| ToolkitError::TrailingData)?;

    Ok(value)
}

fn classify(err: serde_json::Error, body: &[u8]) -> ToolkitError {
    match err.classify() {
        Category::Eof if body.iter().all(u8::is_ascii_whitespace) => ToolkitError::EmptyBody,
        Category::Eof => ToolkitError::TruncatedJson,
        Category::Syntax => ToolkitError::MalformedJson {
            line: err.line(),
            column: err.column(),
        },
        Category::Data => match unknown_field(&err.to_string()) {
            Some(field) => ToolkitError::UnknownField(field),
            None => ToolkitError::IncorrectJsonType(err.to_string()),
        },
        Category::Io => ToolkitError::Json(err),
    }
}

/// Field name from serde's "unknown field `name`, expected ..." message.
fn unknown_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Serialize `data` as a JSON response.
///
/// Extra `headers` are applied first; `Content-Type` is always
/// `application/json`.
pub fn write_json<T: Serialize>(
    status: StatusCode,
    data: &T,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let body = serde_json::to_vec(data)?;

    let mut response = (status, body).into_response();
    if let Some(headers) = headers {
        response.headers_mut().extend(headers);
    }
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(response)
}

/// JSON error envelope for `err`, with status 502 unless one is given.
pub fn error_json(err: &impl Display, status: Option<StatusCode>) -> Response {
    let status = status.unwrap_or(StatusCode::BAD_GATEWAY);
    let payload: JsonResponse<()> = JsonResponse {
        error: true,
        message: err.to_string(),
        data: None,
    };

    write_json(status, &payload, None)
        .unwrap_or_else(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
}
