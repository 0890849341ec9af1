//! Storage backend selection.
//!
//! The `RecordStore` implementation is selected at compile time via feature
//! flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local store from `hegiphy_core`
//! - `dynamodb`: AWS DynamoDB store using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive.
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p hegiphy --no-default-features --features dynamodb
//! ```

use std::sync::Arc;

use anyhow::Result;
use hegiphy_core::storage::RecordStore;

use crate::config::Config;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p hegiphy --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

/// Name of the compiled-in backend, reported by `/healthz`.
#[cfg(feature = "inmemory")]
pub const BACKEND: &str = "inmemory";

#[cfg(feature = "dynamodb")]
pub const BACKEND: &str = "dynamodb";

/// Creates the configured store.
#[cfg(feature = "inmemory")]
pub async fn create_store(_config: &Config) -> Result<Arc<dyn RecordStore>> {
    tracing::warn!("Using in-memory store; favorites are lost on restart");
    Ok(Arc::new(hegiphy_core::storage::InMemoryStore::new()))
}

/// Creates the configured store.
#[cfg(feature = "dynamodb")]
pub async fn create_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    let store = dynamodb::DynamoDbStore::connect(
        &config.dynamodb_table,
        config.aws_endpoint_url.as_deref(),
        config.store_timeout(),
    )
    .await;
    tracing::info!(table = %store.table_name(), "Using DynamoDB store");
    Ok(Arc::new(store))
}
