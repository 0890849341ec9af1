//! Persistence seam for favorites.
//!
//! [`RecordStore`] is the narrow key-value contract a backend implements.
//! [`FavoriteRepository`] layers the favorite semantics on top of it.

mod conversions;
mod error;
mod http_mapping;
mod memory;
mod repository;
mod traits;
mod types;

pub use conversions::{favorite_to_record, record_to_favorite};
pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use memory::InMemoryStore;
pub use repository::{not_found, FavoriteRepository, TagOutcome, DEFAULT_STORE_TIMEOUT};
pub use traits::RecordStore;
pub use types::{
    Attribute, Mutation, Record, RecordKey, PARTITION_KEY, SORT_KEY, TAGS_ATTRIBUTE,
};
