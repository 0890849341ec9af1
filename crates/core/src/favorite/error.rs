use thiserror::Error;

/// Errors raised when a favorite or tag fails input validation.
///
/// These are always detected before the store is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id is required")]
    MissingId,
    #[error("maximum id length is {max}")]
    IdTooLong { max: usize },
    #[error("maximum id size is {max_bytes} bytes")]
    IdTooLarge { max_bytes: usize },
    #[error("maximum tag length is {max}")]
    TagTooLong { max: usize },
}
