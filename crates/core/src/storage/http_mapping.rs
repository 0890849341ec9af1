//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Validation` -> 400 (Bad Request)
/// - `Unavailable` -> 503 (Service Unavailable)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use hegiphy_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "favorite",
///     id: "12345".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Validation(_) => 400,
        RepositoryError::Unavailable(_) => 503,
        RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorite::ValidationError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            entity_type: "favorite",
            id: "g1".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = RepositoryError::Validation(ValidationError::MissingId);
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let error = RepositoryError::Unavailable("connection refused".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        // Stored data we cannot read is our fault, not the caller's.
        let error = RepositoryError::InvalidData("unexpected attribute type".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
