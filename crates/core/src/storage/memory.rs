//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    Attribute, Mutation, Record, RecordKey, RecordStore, RepositoryError, Result, PARTITION_KEY,
    SORT_KEY,
};

/// In-memory storage backend for tests and local development.
///
/// Uses a `BTreeMap` keyed by `(partition, sort)` so a partition query walks a
/// contiguous range in sort-key order. Data is not persisted and is lost when
/// the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<BTreeMap<RecordKey, Record>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored record, bypassing the favorite mapping.
    #[cfg(any(test, feature = "test-util"))]
    pub async fn raw(&self, partition: &str, sort: &str) -> Option<Record> {
        let records = self.records.read().await;
        records.get(&RecordKey::new(partition, sort)).cloned()
    }

    /// Number of stored records across all partitions.
    #[cfg(any(test, feature = "test-util"))]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    #[cfg(any(test, feature = "test-util"))]
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn reject_empty_sets(record: &Record) -> Result<()> {
    for (name, value) in record {
        if let Attribute::Ss(values) = value {
            if values.is_empty() {
                return Err(RepositoryError::InvalidData(format!(
                    "{name} is an empty string set"
                )));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn query(&self, partition: &str, sort: Option<&str>) -> Result<Vec<Record>> {
        let records = self.records.read().await;
        match sort {
            Some(sort) => Ok(records
                .get(&RecordKey::new(partition, sort))
                .cloned()
                .into_iter()
                .collect()),
            None => Ok(records
                .range(RecordKey::new(partition, "")..)
                .take_while(|(key, _)| key.partition == partition)
                .map(|(_, record)| record.clone())
                .collect()),
        }
    }

    async fn put(&self, record: Record) -> Result<()> {
        let key = RecordKey::from_record(&record).ok_or_else(|| {
            RepositoryError::InvalidData(format!("record requires {PARTITION_KEY} and {SORT_KEY}"))
        })?;
        reject_empty_sets(&record)?;

        let mut records = self.records.write().await;
        records.insert(key, record);
        Ok(())
    }

    async fn update(&self, partition: &str, sort: &str, mutation: Mutation) -> Result<Record> {
        if matches!(mutation.attribute(), PARTITION_KEY | SORT_KEY) {
            return Err(RepositoryError::InvalidData(format!(
                "cannot modify key attribute {}",
                mutation.attribute()
            )));
        }

        let mut records = self.records.write().await;
        let record = records
            .get_mut(&RecordKey::new(partition, sort))
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "record",
                id: format!("{partition}/{sort}"),
            })?;

        match mutation {
            Mutation::Set { attribute, value } => {
                if matches!(&value, Attribute::Ss(values) if values.is_empty()) {
                    return Err(RepositoryError::InvalidData(format!(
                        "{attribute} is an empty string set"
                    )));
                }
                record.insert(attribute, value);
            }
            Mutation::Remove { attribute } => {
                record.remove(&attribute);
            }
        }

        Ok(record.clone())
    }

    async fn delete(&self, partition: &str, sort: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(&RecordKey::new(partition, sort));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::storage::TAGS_ATTRIBUTE;

    fn record(partition: &str, sort: &str) -> Record {
        let mut record = Record::new();
        record.insert(PARTITION_KEY.to_string(), Attribute::S(partition.to_string()));
        record.insert(SORT_KEY.to_string(), Attribute::S(sort.to_string()));
        record
    }

    fn string_set(values: &[&str]) -> Attribute {
        Attribute::Ss(values.iter().map(|v| v.to_string()).collect())
    }

    #[tokio::test]
    async fn test_put_and_query_single() {
        let store = InMemoryStore::new();
        store.put(record("u1", "g1")).await.unwrap();

        let found = store.query("u1", Some("g1")).await.unwrap();
        assert_eq!(found, vec![record("u1", "g1")]);
    }

    #[tokio::test]
    async fn test_query_missing_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.query("u1", Some("g1")).await.unwrap().is_empty());
        assert!(store.query("u1", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_partition_is_isolated_and_ordered() {
        let store = InMemoryStore::new();
        store.put(record("u1", "g2")).await.unwrap();
        store.put(record("u1", "g1")).await.unwrap();
        store.put(record("u10", "g3")).await.unwrap();
        store.put(record("u2", "g1")).await.unwrap();

        let found = store.query("u1", None).await.unwrap();
        assert_eq!(found, vec![record("u1", "g1"), record("u1", "g2")]);
    }

    #[tokio::test]
    async fn test_put_replaces_existing() {
        let store = InMemoryStore::new();
        let mut tagged = record("u1", "g1");
        tagged.insert(TAGS_ATTRIBUTE.to_string(), string_set(&["cats"]));
        store.put(tagged).await.unwrap();

        store.put(record("u1", "g1")).await.unwrap();

        assert_eq!(store.raw("u1", "g1").await, Some(record("u1", "g1")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_rejects_empty_string_set() {
        let store = InMemoryStore::new();
        let mut invalid = record("u1", "g1");
        invalid.insert(TAGS_ATTRIBUTE.to_string(), Attribute::Ss(BTreeSet::new()));

        let result = store.put(invalid).await;
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_requires_keys() {
        let store = InMemoryStore::new();
        let result = store.put(Record::new()).await;
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_update_set_and_remove() {
        let store = InMemoryStore::new();
        store.put(record("u1", "g1")).await.unwrap();

        let updated = store
            .update("u1", "g1", Mutation::set(TAGS_ATTRIBUTE, string_set(&["cats"])))
            .await
            .unwrap();
        assert_eq!(updated.get(TAGS_ATTRIBUTE), Some(&string_set(&["cats"])));

        let updated = store
            .update("u1", "g1", Mutation::remove(TAGS_ATTRIBUTE))
            .await
            .unwrap();
        assert_eq!(updated, record("u1", "g1"));
    }

    #[tokio::test]
    async fn test_update_missing_record_does_not_create() {
        let store = InMemoryStore::new();

        let result = store
            .update("u1", "g1", Mutation::set(TAGS_ATTRIBUTE, string_set(&["cats"])))
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_rejects_key_attributes() {
        let store = InMemoryStore::new();
        store.put(record("u1", "g1")).await.unwrap();

        let result = store
            .update("u1", "g1", Mutation::set(SORT_KEY, Attribute::S("g2".to_string())))
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert_eq!(store.raw("u1", "g1").await, Some(record("u1", "g1")));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryStore::new();
        store.put(record("u1", "g1")).await.unwrap();

        store.delete("u1", "g1").await.unwrap();
        store.delete("u1", "g1").await.unwrap();

        assert!(store.is_empty().await);
    }
}
