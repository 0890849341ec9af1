//! Favorite semantics on top of a [`RecordStore`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::favorite::{
    filter_by_tag, insert_tag, remove_tag, validate_id, validate_tag, CreateFavorite, Favorite,
    TagChange,
};

use super::{
    favorite_to_record, record_to_favorite, Attribute, Mutation, RecordStore, RepositoryError,
    Result, TAGS_ATTRIBUTE,
};

/// Timeout applied to each store call unless overridden.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(3);

const ENTITY_TYPE: &str = "favorite";

/// Result of a tag mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// The tag set changed and was written.
    Updated(Favorite),
    /// The tag set already satisfied the request; nothing was written.
    Unchanged(Favorite),
    /// No favorite exists for the owner and id.
    NotFound,
}

impl TagOutcome {
    /// The resulting favorite, or `None` when it does not exist.
    pub fn into_favorite(self) -> Option<Favorite> {
        match self {
            TagOutcome::Updated(favorite) | TagOutcome::Unchanged(favorite) => Some(favorite),
            TagOutcome::NotFound => None,
        }
    }
}

/// Owner-scoped favorites repository.
///
/// Holds no mutable state of its own. Tag mutations are read-then-write, so
/// two concurrent mutations of the same favorite can lose one update.
#[derive(Clone)]
pub struct FavoriteRepository {
    store: Arc<dyn RecordStore>,
    timeout: Duration,
}

impl FavoriteRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Sets the per-call store timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn call<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(operation, timeout = ?self.timeout, "Store call timed out");
                Err(RepositoryError::Unavailable(format!(
                    "{operation} timed out after {:?}",
                    self.timeout
                )))
            }
        }
    }

    /// Gets a single favorite. `None` when it does not exist.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get(&self, owner: &str, id: &str) -> Result<Option<Favorite>> {
        validate_id(id)?;
        let records = self.call("query", self.store.query(owner, Some(id))).await?;
        records.first().map(record_to_favorite).transpose()
    }

    /// Lists every favorite of `owner`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list(&self, owner: &str) -> Result<Vec<Favorite>> {
        let records = self.call("query", self.store.query(owner, None)).await?;
        records.iter().map(record_to_favorite).collect()
    }

    /// Lists the favorites of `owner` carrying `tag`.
    ///
    /// The filter value is lower-cased; stored tags are compared as-is.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_by_tag(&self, owner: &str, tag: &str) -> Result<Vec<Favorite>> {
        let favorites = self.list(owner).await?;
        Ok(filter_by_tag(favorites, tag))
    }

    /// Creates or replaces a favorite.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn create(&self, owner: &str, request: CreateFavorite) -> Result<Favorite> {
        request.validate()?;
        let favorite = request.into_favorite(owner);
        self.call("put", self.store.put(favorite_to_record(&favorite)))
            .await?;
        Ok(favorite)
    }

    /// Deletes a favorite. Deleting a missing favorite succeeds.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete(&self, owner: &str, id: &str) -> Result<()> {
        validate_id(id)?;
        self.call("delete", self.store.delete(owner, id)).await
    }

    /// Adds `tag` to a favorite's tag set.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn add_tag(&self, owner: &str, id: &str, tag: &str) -> Result<TagOutcome> {
        validate_id(id)?;
        validate_tag(tag)?;
        self.mutate_tags(owner, id, |favorite| insert_tag(&favorite.tags, tag))
            .await
    }

    /// Removes `tag` from a favorite's tag set. Removing the last tag drops
    /// the tags attribute.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn remove_tag(&self, owner: &str, id: &str, tag: &str) -> Result<TagOutcome> {
        validate_id(id)?;
        validate_tag(tag)?;
        self.mutate_tags(owner, id, |favorite| remove_tag(&favorite.tags, tag))
            .await
    }

    async fn mutate_tags<F>(&self, owner: &str, id: &str, change: F) -> Result<TagOutcome>
    where
        F: FnOnce(&Favorite) -> TagChange,
    {
        let Some(current) = self.get(owner, id).await? else {
            return Ok(TagOutcome::NotFound);
        };

        let Some(mutation) = tag_mutation(change(&current)) else {
            return Ok(TagOutcome::Unchanged(current));
        };

        match self
            .call("update", self.store.update(owner, id, mutation))
            .await
        {
            Ok(record) => Ok(TagOutcome::Updated(record_to_favorite(&record)?)),
            // Deleted between the read and the conditional write.
            Err(RepositoryError::NotFound { .. }) => Ok(TagOutcome::NotFound),
            Err(error) => Err(error),
        }
    }
}

impl std::fmt::Debug for FavoriteRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoriteRepository")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Store mutation for a tag change. `None` means no write is needed.
fn tag_mutation(change: TagChange) -> Option<Mutation> {
    match change {
        TagChange::Unchanged => None,
        TagChange::Set(tags) => Some(Mutation::set(TAGS_ATTRIBUTE, Attribute::Ss(tags))),
        TagChange::Clear => Some(Mutation::remove(TAGS_ATTRIBUTE)),
    }
}

/// Builds the NotFound error handlers return for a missing favorite.
pub fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY_TYPE,
        id: id.to_string(),
    }
}
