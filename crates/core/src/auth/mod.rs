mod error;
mod functions;
mod traits;
mod types;

pub use error::IdentityError;
pub use functions::{email_to_owner, parse_bearer_token};
pub use traits::{IdentityVerifier, Result};
pub use types::Owner;
