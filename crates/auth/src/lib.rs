//! Bearer token authentication for hegiphy.
//!
//! This crate provides:
//! - A userinfo-endpoint verifier that resolves tokens to owner emails
//! - A token table verifier for development and tests (`mock` feature)
//! - The axum extractor that guards the favorites routes

mod config;
mod error;
mod extractors;
mod providers;
mod state;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentOwner;
#[cfg(feature = "mock")]
pub use providers::{parse_mock_users, MockVerifier};
pub use providers::UserInfoVerifier;
pub use state::AuthState;
