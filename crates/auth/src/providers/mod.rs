//! Identity verifier implementations.
//!
//! - `UserInfoVerifier` asks the provider's userinfo endpoint who owns a token
//! - `MockVerifier` resolves tokens from a fixed table (`mock` feature)

#[cfg(feature = "mock")]
mod mock;
mod userinfo;

#[cfg(feature = "mock")]
pub use mock::{parse_mock_users, MockVerifier};
pub use userinfo::UserInfoVerifier;
