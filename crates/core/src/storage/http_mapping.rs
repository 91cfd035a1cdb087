//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! Handlers built on these repositories translate failures with this mapping
//! so every consumer answers the same way.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Precondition` -> 409 (Conflict)
/// - `UnsupportedScope` -> 400 (Bad Request)
/// - `Codec` -> 500 (Internal Server Error)
/// - `Backend` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use checkin_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::not_found("Trainee", "id 999");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Precondition { .. } => 409,
        RepositoryError::UnsupportedScope { .. } => 400,
        RepositoryError::Codec(_) => 500,
        RepositoryError::Backend { .. } => 502,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Scope;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::not_found("Trainee", "id 1");
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_precondition_maps_to_409() {
        let error = RepositoryError::Precondition {
            entity_type: "Trainee",
            id: "1".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_unsupported_scope_maps_to_400() {
        let error = RepositoryError::UnsupportedScope {
            entity_type: "Language",
            scope: Scope::Company,
        };
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_codec_maps_to_500() {
        let error = RepositoryError::Codec("bad attribute".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_backend_maps_to_502() {
        let error = RepositoryError::backend("failed to get trainee", "timeout");
        assert_eq!(repository_error_to_status_code(&error), 502);
    }
}
