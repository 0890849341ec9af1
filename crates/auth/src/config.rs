use std::time::Duration;

use url::Url;

use crate::error::AuthError;

/// Default identity provider domain.
pub const DEFAULT_AUTH_DOMAIN: &str = "budb-hegiphy.auth0.com";

/// Default timeout for a userinfo round trip.
pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Identity provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Provider domain, or a full base URL when it carries a scheme.
    pub domain: String,
    pub timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_AUTH_DOMAIN.to_string(),
            timeout: DEFAULT_AUTH_TIMEOUT,
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH0_DOMAIN`: identity provider domain (default: `budb-hegiphy.auth0.com`)
    /// - `AUTH_TIMEOUT_MS`: userinfo request timeout in milliseconds (default: 5000)
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_TIMEOUT_MS` is not a number.
    pub fn from_env() -> Result<Self, AuthError> {
        let domain =
            std::env::var("AUTH0_DOMAIN").unwrap_or_else(|_| DEFAULT_AUTH_DOMAIN.to_string());

        let timeout = match std::env::var("AUTH_TIMEOUT_MS") {
            Ok(value) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| AuthError::Config(format!("AUTH_TIMEOUT_MS: {e}")))?,
            Err(_) => DEFAULT_AUTH_TIMEOUT,
        };

        Ok(Self { domain, timeout })
    }

    /// The userinfo endpoint. Bare domains are served over https.
    pub fn userinfo_url(&self) -> Result<Url, AuthError> {
        let base = if self.domain.contains("://") {
            self.domain.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.domain.trim_end_matches('/'))
        };

        Url::parse(&format!("{base}/userinfo"))
            .map_err(|e| AuthError::Config(format!("invalid auth domain {}: {e}", self.domain)))
    }
}
