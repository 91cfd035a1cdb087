use std::path::{Component, Path, PathBuf};

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::{Result, ToolkitError};

/// Serve `dir/file` as an attachment named `display_name`.
///
/// `Content-Disposition: attachment` makes browsers save the file instead of
/// rendering it. `file` must stay inside `dir`.
pub async fn download_static_file(dir: &Path, file: &str, display_name: &str) -> Result<Response> {
    let path = resolve(dir, file)?;
    let disposition = attachment(display_name)?;

    tracing::debug!(path = %path.display(), "Serving download");
    let bytes = tokio::fs::read(&path).await?;

    let mut response = (StatusCode::OK, bytes).into_response();
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers.insert(CONTENT_DISPOSITION, disposition);

    Ok(response)
}

fn resolve(dir: &Path, file: &str) -> Result<PathBuf> {
    let relative = Path::new(file);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if file.is_empty() || escapes {
        return Err(ToolkitError::InvalidPath(file.to_string()));
    }

    Ok(dir.join(relative))
}

fn attachment(display_name: &str) -> Result<HeaderValue> {
    let name: String = display_name
        .chars()
        .filter(|c| *c != '"' && *c != '\\')
        .collect();

    HeaderValue::from_str(&format!("attachment; filename=\"{name}\""))
        .map_err(|_| ToolkitError::InvalidPath(display_name.to_string()))
}
