use std::{env, time::Duration};

use anyhow::{Context, Result};
use hegiphy_auth::AuthConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding favorites (default: "hegiphy")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_table: String,
    /// Endpoint override for a local DynamoDB (default: unset)
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// Per-call store timeout in milliseconds (default: 3000)
    pub store_timeout_ms: u64,
    /// GIF provider API base URL (default: "https://api.giphy.com/v1")
    pub giphy_base_url: String,
    /// GIF provider API key (default: empty)
    pub giphy_api_key: String,
    /// Whole-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Identity provider settings
    pub auth: AuthConfig,
    /// Parameter Store path overlaid on this config (default: "/hegiphy").
    /// `None` disables the overlay.
    /// Note: Only used when the `ssm` feature is enabled.
    #[allow(dead_code)]
    pub ssm_params_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE` - Favorites table name (default: "hegiphy")
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `STORE_TIMEOUT_MS` - Store call timeout (default: 3000)
    /// - `GIPHY_BASE_URL` - GIF provider base URL (default: "https://api.giphy.com/v1")
    /// - `GIPHY_API_KEY` - GIF provider API key (default: empty)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout (default: 10)
    /// - `AUTH0_DOMAIN`, `AUTH_TIMEOUT_MS` - see [`AuthConfig::from_env`]
    /// - `SSM_PARAMS_PATH` - Parameter Store path (default: "/hegiphy", empty disables)
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            dynamodb_table: env::var("DYNAMODB_TABLE").unwrap_or_else(|_| "hegiphy".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok().filter(|v| !v.is_empty()),
            store_timeout_ms: parse_var("STORE_TIMEOUT_MS", 3000)?,
            giphy_base_url: env::var("GIPHY_BASE_URL")
                .unwrap_or_else(|_| "https://api.giphy.com/v1".to_string()),
            giphy_api_key: env::var("GIPHY_API_KEY").unwrap_or_default(),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 10)?,
            auth: AuthConfig::from_env()?,
            ssm_params_path: parameters_path(
                &env::var("SSM_PARAMS_PATH").unwrap_or_else(|_| DEFAULT_SSM_PARAMS_PATH.to_string()),
            ),
        })
    }

    /// Loads the environment config and overlays Parameter Store secrets.
    pub async fn load() -> Result<Self> {
        overlay_parameters(Self::from_env()?).await
    }

    /// Overrides settings with parameters keyed by config name.
    ///
    /// Recognized keys: `auth0_domain`, `dynamodb_table`, `giphy_base_url`
    /// and `giphy_api_key`. Other keys are ignored.
    #[cfg_attr(not(feature = "ssm"), allow(dead_code))]
    pub fn merge_parameters<I>(&mut self, parameters: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in parameters {
            match key.as_str() {
                "auth0_domain" => self.auth.domain = value,
                "dynamodb_table" => self.dynamodb_table = value,
                "giphy_base_url" => self.giphy_base_url = value,
                "giphy_api_key" => self.giphy_api_key = value,
                _ => tracing::debug!(key = %key, "Ignoring unknown parameter"),
            }
        }
    }

    /// Get the store timeout as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dynamodb_table: "hegiphy".to_string(),
            aws_endpoint_url: None,
            store_timeout_ms: 3000,
            giphy_base_url: "https://api.giphy.com/v1".to_string(),
            giphy_api_key: String::new(),
            request_timeout_secs: 10,
            auth: AuthConfig::default(),
            ssm_params_path: parameters_path(DEFAULT_SSM_PARAMS_PATH),
        }
    }
}

/// Parameter Store path read when `SSM_PARAMS_PATH` is unset.
pub const DEFAULT_SSM_PARAMS_PATH: &str = "/hegiphy";

#[cfg(feature = "ssm")]
async fn overlay_parameters(mut config: Config) -> Result<Config> {
    if let Some(path) = config.ssm_params_path.clone() {
        let parameters = crate::secrets::load_parameters(&path).await?;
        tracing::info!(path = %path, count = parameters.len(), "Loaded Parameter Store secrets");
        config.merge_parameters(parameters);
    }
    Ok(config)
}

#[cfg(not(feature = "ssm"))]
async fn overlay_parameters(config: Config) -> Result<Config> {
    Ok(config)
}

/// Normalizes a parameter path to end in `/`. An empty path disables loading.
fn parameters_path(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else if raw.ends_with('/') {
        Some(raw.to_string())
    } else {
        Some(format!("{raw}/"))
    }
}

/// Config key of parameter `name` read under `path`.
///
/// `path` must already end in `/`. Names outside `path` yield `None`.
#[cfg_attr(not(feature = "ssm"), allow(dead_code))]
pub fn parameter_key<'a>(path: &str, name: &'a str) -> Option<&'a str> {
    name.strip_prefix(path).filter(|key| !key.is_empty())
}

fn parse_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be a number, got {value:?}")),
        Err(_) => Ok(default),
    }
}
