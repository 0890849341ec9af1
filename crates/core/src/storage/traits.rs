use async_trait::async_trait;

use super::{Mutation, Record, Result};

/// Minimal key-value contract a favorites backend must satisfy.
///
/// Records are addressed by a partition key (the owner) and a sort key (the
/// favorite id). Implementations are shared across requests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every record under `partition`, or the single record matching
    /// `sort` when given. Missing records yield an empty vector.
    async fn query(&self, partition: &str, sort: Option<&str>) -> Result<Vec<Record>>;

    /// Writes a full record, replacing any record with the same key.
    async fn put(&self, record: Record) -> Result<()>;

    /// Applies `mutation` to an existing record and returns the record as
    /// stored afterwards. Fails with `NotFound` when the record does not
    /// exist; never creates one.
    async fn update(&self, partition: &str, sort: &str, mutation: Mutation) -> Result<Record>;

    /// Deletes a record. Deleting a missing record succeeds.
    async fn delete(&self, partition: &str, sort: &str) -> Result<()>;
}
