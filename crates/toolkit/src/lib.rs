//! Helpers shared by the check-in services.
//!
//! - [`slugify`] and [`random_string`] for names
//! - [`read_json`], [`write_json`] and [`error_json`] for JSON over HTTP
//! - [`push_json_to_remote`] to POST JSON to another service
//! - [`download_static_file`], [`upload_files`] and [`upload_one_file`] for
//!   file transfer through axum

mod download;
mod error;
mod json;
mod random;
mod remote;
mod slug;
mod upload;

pub use download::download_static_file;
pub use error::{ApiError, Result, ToolkitError};
pub use json::{error_json, read_json, write_json, JsonResponse, DEFAULT_MAX_JSON_SIZE};
pub use random::random_string;
pub use remote::push_json_to_remote;
pub use slug::slugify;
pub use upload::{
    create_dir_if_not_exist, upload_files, upload_one_file, UploadOptions, UploadedFile,
    DEFAULT_MAX_FILE_SIZE,
};
