use async_trait::async_trait;

use super::{IdentityError, Owner};

/// Result type for identity verification.
pub type Result<T> = std::result::Result<T, IdentityError>;

/// Turns an opaque bearer token into a verified owner identifier.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify `token` and return the owner it belongs to.
    async fn verify(&self, token: &str) -> Result<Owner>;
}
