//! Application state shared by all request handlers.

use std::sync::Arc;

use anyhow::Result;
use hegiphy_auth::AuthState;
use hegiphy_core::auth::IdentityVerifier;
use hegiphy_core::storage::FavoriteRepository;

use crate::{config::Config, giphy::GiphyClient, storage};

/// Shared application state.
///
/// Cloned for each request handler. Everything inside is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Owner-scoped favorites repository.
    pub favorites: FavoriteRepository,
    /// Bearer token verification.
    pub auth: AuthState,
    /// GIF provider passthrough client.
    pub giphy: Arc<GiphyClient>,
}

impl AppState {
    /// Creates a new AppState from its collaborators.
    pub fn new(
        favorites: FavoriteRepository,
        verifier: Arc<dyn IdentityVerifier>,
        giphy: GiphyClient,
    ) -> Self {
        Self {
            favorites,
            auth: AuthState::new(verifier),
            giphy: Arc::new(giphy),
        }
    }

    /// Builds the production state from configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = storage::create_store(config).await?;
        let favorites = FavoriteRepository::new(store).with_timeout(config.store_timeout());
        let giphy = GiphyClient::new(&config.giphy_base_url, &config.giphy_api_key)?;
        tracing::info!(base_url = %giphy.base_url(), "GIF provider configured");

        Ok(Self::new(favorites, build_verifier(config)?, giphy))
    }

    /// State over an arbitrary store, with the default GIF client.
    #[cfg(test)]
    pub fn for_tests(
        store: Arc<dyn hegiphy_core::storage::RecordStore>,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        let giphy = GiphyClient::new("http://127.0.0.1:1", "test-key").unwrap();
        Self::new(FavoriteRepository::new(store), verifier, giphy)
    }

    /// Name of the compiled-in storage backend.
    pub fn store_backend(&self) -> &'static str {
        storage::BACKEND
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}

#[cfg(not(feature = "auth-mock"))]
fn build_verifier(config: &Config) -> Result<Arc<dyn IdentityVerifier>> {
    let verifier = hegiphy_auth::UserInfoVerifier::new(&config.auth)?;
    tracing::info!(userinfo = %verifier.userinfo_url(), "Using userinfo identity verifier");
    Ok(Arc::new(verifier))
}

#[cfg(feature = "auth-mock")]
fn build_verifier(_config: &Config) -> Result<Arc<dyn IdentityVerifier>> {
    Ok(Arc::new(hegiphy_auth::MockVerifier::from_env()?))
}
