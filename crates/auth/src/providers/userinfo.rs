//! Userinfo endpoint verifier.

use async_trait::async_trait;
use hegiphy_core::auth::{email_to_owner, IdentityError, IdentityVerifier, Owner, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::config::AuthConfig;
use crate::error::AuthError;

#[derive(Debug, Deserialize)]
struct UserInfo {
    email: Option<String>,
}

/// Resolves a bearer token by forwarding it to the provider's `/userinfo`
/// endpoint and reading the `email` claim.
pub struct UserInfoVerifier {
    http_client: reqwest::Client,
    userinfo_url: Url,
}

impl UserInfoVerifier {
    /// Build a verifier from the auth configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain does not form a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(config: &AuthConfig) -> std::result::Result<Self, AuthError> {
        // Build HTTP client without redirect following
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            userinfo_url: config.userinfo_url()?,
        })
    }

    pub fn userinfo_url(&self) -> &Url {
        &self.userinfo_url
    }
}

#[async_trait]
impl IdentityVerifier for UserInfoVerifier {
    async fn verify(&self, token: &str) -> Result<Owner> {
        let response = self
            .http_client
            .get(self.userinfo_url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Userinfo request failed");
                IdentityError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(IdentityError::Unavailable(format!(
                "userinfo returned {status}"
            )));
        }
        if !status.is_success() {
            return Err(IdentityError::Rejected(format!("userinfo returned {status}")));
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| IdentityError::Rejected(format!("unreadable userinfo: {e}")))?;

        email_to_owner(info.email.as_deref())
    }
}
