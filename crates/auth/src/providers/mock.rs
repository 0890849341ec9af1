//! Token table verifier for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use hegiphy_core::auth::{IdentityError, IdentityVerifier, Owner, Result};

use crate::error::AuthError;

/// Verifier that resolves tokens from a fixed token to owner table.
#[derive(Debug, Clone, Default)]
pub struct MockVerifier {
    users: HashMap<String, Owner>,
}

impl MockVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` as belonging to `owner`.
    pub fn with_user(mut self, token: impl Into<String>, owner: impl Into<String>) -> Self {
        self.users.insert(token.into(), Owner::new(owner));
        self
    }

    /// Load the table from `AUTH_MOCK_USERS` (`token:owner,token:owner`).
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but malformed.
    pub fn from_env() -> std::result::Result<Self, AuthError> {
        let table = std::env::var("AUTH_MOCK_USERS").unwrap_or_default();
        let users = parse_mock_users(&table)?;
        tracing::warn!(users = users.len(), "Using mock identity verifier");
        Ok(users
            .into_iter()
            .fold(Self::new(), |verifier, (token, owner)| {
                verifier.with_user(token, owner)
            }))
    }
}

/// Parses `token:owner` pairs separated by commas. Blank entries are skipped.
pub fn parse_mock_users(table: &str) -> std::result::Result<Vec<(String, String)>, AuthError> {
    table.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((token, owner)) if !token.is_empty() && !owner.is_empty() => {
                Ok((token.to_string(), owner.to_string()))
            }
            _ => Err(AuthError::Config(format!(
                "AUTH_MOCK_USERS entry {entry:?} is not token:owner"
            ))),
        })
        .collect()
}

#[async_trait]
impl IdentityVerifier for MockVerifier {
    async fn verify(&self, token: &str) -> Result<Owner> {
        self.users
            .get(token)
            .cloned()
            .ok_or_else(|| IdentityError::Rejected("unknown token".to_string()))
    }
}
