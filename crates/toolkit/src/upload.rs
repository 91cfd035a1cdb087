//! Multipart file uploads.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use tokio::io::AsyncWriteExt;

use crate::random::random_string;
use crate::{Result, ToolkitError};

/// Per-file size limit when none is configured (1 GiB).
pub const DEFAULT_MAX_FILE_SIZE: usize = 1024 * 1024 * 1024;

const RANDOM_NAME_LENGTH: usize = 25;

/// Limits and naming for [`upload_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Largest accepted file, in bytes.
    pub max_file_size: usize,
    /// Accepted content types, compared case-insensitively against the type
    /// sniffed from the file's leading bytes. Empty accepts all.
    pub allowed_types: Vec<String>,
    /// Store files under a random name that keeps the original extension.
    pub rename: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: Vec::new(),
            rename: true,
        }
    }
}

impl UploadOptions {
    pub fn allowing(types: &[&str]) -> Self {
        Self {
            allowed_types: types.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    fn allows(&self, content_type: &str) -> bool {
        self.allowed_types.is_empty()
            || self
                .allowed_types
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
    }
}

/// A file written by [`upload_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub new_file_name: String,
    pub original_file_name: String,
    pub file_size: u64,
}

/// Create `path` and its parents if missing.
pub async fn create_dir_if_not_exist(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

/// Save every file field of `multipart` into `dir`.
///
/// Fields without a file name are ordinary form values and are skipped. The
/// content type comes from the file's first bytes; the part's declared
/// `Content-Type` is used only when the bytes are not recognized. A file whose
/// type is not allowed, or that exceeds the size limit, aborts the upload;
/// files saved before it are kept.
pub async fn upload_files(
    multipart: &mut Multipart,
    dir: &Path,
    options: &UploadOptions,
) -> Result<Vec<UploadedFile>> {
    create_dir_if_not_exist(dir).await?;

    let mut uploaded = Vec::new();
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(original) = field.file_name().map(base_name) else {
            continue;
        };

        let declared = field.content_type().map(str::to_string);
        let first = field.chunk().await.map_err(multipart_error)?;
        let content_type =
            detect_content_type(first.as_deref().unwrap_or_default(), declared.as_deref());
        if !options.allows(&content_type) {
            return Err(ToolkitError::FileTypeNotAllowed(content_type));
        }

        let new_file_name = if options.rename {
            random_name(&original)
        } else {
            original.clone()
        };
        if new_file_name.is_empty() {
            return Err(ToolkitError::InvalidPath(original));
        }

        let path = dir.join(&new_file_name);
        let file_size = save_field(field, first, &path, options.max_file_size).await?;

        tracing::debug!(
            original = %original,
            stored = %new_file_name,
            content_type = %content_type,
            file_size,
            "Saved uploaded file"
        );
        uploaded.push(UploadedFile {
            new_file_name,
            original_file_name: original,
            file_size,
        });
    }

    Ok(uploaded)
}

/// Save the first file of `multipart` into `dir`.
pub async fn upload_one_file(
    multipart: &mut Multipart,
    dir: &Path,
    options: &UploadOptions,
) -> Result<UploadedFile> {
    upload_files(multipart, dir, options)
        .await?
        .into_iter()
        .next()
        .ok_or(ToolkitError::NoFile)
}

/// Sniffed type of `head`, falling back to the declared one.
fn detect_content_type(head: &[u8], declared: Option<&str>) -> String {
    infer::get(head)
        .map(|kind| kind.mime_type())
        .or(declared)
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Write `first` and the rest of `field` to `path`.
async fn save_field(
    mut field: Field<'_>,
    first: Option<Bytes>,
    path: &Path,
    limit: usize,
) -> Result<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut written: usize = 0;

    let mut next = first;
    while let Some(chunk) = next {
        written += chunk.len();
        if written > limit {
            drop(file);
            tokio::fs::remove_file(path).await?;
            return Err(ToolkitError::FileTooLarge { limit });
        }
        file.write_all(&chunk).await?;
        next = field.chunk().await.map_err(multipart_error)?;
    }

    file.flush().await?;
    Ok(written as u64)
}

/// Client-supplied names may carry directories; keep only the last component.
fn base_name(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
}

fn random_name(original: &str) -> String {
    match Path::new(original).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}.{}", random_string(RANDOM_NAME_LENGTH), ext),
        None => random_string(RANDOM_NAME_LENGTH),
    }
}

fn multipart_error(err: MultipartError) -> ToolkitError {
    ToolkitError::Multipart(err.body_text())
}
