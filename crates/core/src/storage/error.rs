use thiserror::Error;

use crate::favorite::ValidationError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} with id {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
