//! API request types for favorite operations.
//!
//! Pure data types with validation; no I/O.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::Favorite;

/// Maximum length of a favorite id, in characters.
pub const MAX_ID_LENGTH: usize = 1024;

/// Maximum encoded size of a favorite id. The store rejects larger sort keys.
pub const MAX_ID_BYTES: usize = 1024;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LENGTH: usize = 140;

/// Request payload for creating (or replacing) a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFavorite {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CreateFavorite {
    /// Create a new request without tags.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: None,
        }
    }

    /// Set the initial tags.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Checks id presence and the id/tag length limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id(&self.id)?;
        for tag in self.tags.iter().flatten() {
            validate_tag(tag)?;
        }
        Ok(())
    }

    /// Convert into a Favorite owned by `owner`. Missing tags become the empty set.
    pub fn into_favorite(self, owner: impl Into<String>) -> Favorite {
        Favorite::new(owner, self.id).with_tags(self.tags.unwrap_or_default())
    }
}

/// Checks that `id` is present and fits both [`MAX_ID_LENGTH`] characters
/// and [`MAX_ID_BYTES`] bytes of UTF-8.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::MissingId);
    }
    if id.chars().count() > MAX_ID_LENGTH {
        return Err(ValidationError::IdTooLong { max: MAX_ID_LENGTH });
    }
    if id.len() > MAX_ID_BYTES {
        return Err(ValidationError::IdTooLarge { max_bytes: MAX_ID_BYTES });
    }
    Ok(())
}

/// Checks that a single tag is within [`MAX_TAG_LENGTH`].
pub fn validate_tag(tag: &str) -> Result<(), ValidationError> {
    if tag.chars().count() > MAX_TAG_LENGTH {
        return Err(ValidationError::TagTooLong {
            max: MAX_TAG_LENGTH,
        });
    }
    Ok(())
}
