use thiserror::Error;

/// Why a bearer token could not be turned into an owner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider answered and refused the token.
    #[error("token rejected: {0}")]
    Rejected(String),

    /// The provider could not be reached or did not answer in time.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
