use std::collections::{BTreeMap, BTreeSet};

/// Partition key attribute. Holds the owner identifier.
pub const PARTITION_KEY: &str = "pk";

/// Sort key attribute. Holds the favorite id.
pub const SORT_KEY: &str = "sk";

/// String-set attribute holding a favorite's tags. Absent when there are none.
pub const TAGS_ATTRIBUTE: &str = "tags";

/// A stored attribute value.
///
/// Mirrors the subset of key-value store types a favorite needs. String sets
/// must never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    S(String),
    Ss(BTreeSet<String>),
}

impl Attribute {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Attribute::S(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ss(&self) -> Option<&BTreeSet<String>> {
        match self {
            Attribute::Ss(values) => Some(values),
            _ => None,
        }
    }
}

/// One stored item: attribute name to value.
pub type Record = BTreeMap<String, Attribute>;

/// Composite primary key of a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub partition: String,
    pub sort: String,
}

impl RecordKey {
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }

    /// Reads the key out of a record, if both key attributes are strings.
    pub fn from_record(record: &Record) -> Option<Self> {
        let partition = record.get(PARTITION_KEY)?.as_s()?;
        let sort = record.get(SORT_KEY)?.as_s()?;
        Some(Self::new(partition, sort))
    }
}

/// A single-attribute conditional update applied to an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Set { attribute: String, value: Attribute },
    Remove { attribute: String },
}

impl Mutation {
    pub fn set(attribute: impl Into<String>, value: Attribute) -> Self {
        Mutation::Set {
            attribute: attribute.into(),
            value,
        }
    }

    pub fn remove(attribute: impl Into<String>) -> Self {
        Mutation::Remove {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        match self {
            Mutation::Set { attribute, .. } | Mutation::Remove { attribute } => attribute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key_from_record() {
        let mut record = Record::new();
        record.insert(PARTITION_KEY.to_string(), Attribute::S("u1".to_string()));
        record.insert(SORT_KEY.to_string(), Attribute::S("g1".to_string()));

        assert_eq!(RecordKey::from_record(&record), Some(RecordKey::new("u1", "g1")));
    }

    #[test]
    fn test_record_key_requires_string_keys() {
        let mut record = Record::new();
        record.insert(PARTITION_KEY.to_string(), Attribute::S("u1".to_string()));
        record.insert(
            SORT_KEY.to_string(),
            Attribute::Ss(BTreeSet::from(["g1".to_string()])),
        );

        assert_eq!(RecordKey::from_record(&record), None);
    }

    #[test]
    fn test_record_keys_order_by_partition_then_sort() {
        let mut keys = vec![
            RecordKey::new("u2", "a"),
            RecordKey::new("u1", "b"),
            RecordKey::new("u1", "a"),
        ];
        keys.sort();

        assert_eq!(
            keys,
            vec![
                RecordKey::new("u1", "a"),
                RecordKey::new("u1", "b"),
                RecordKey::new("u2", "a"),
            ]
        );
    }

    #[test]
    fn test_mutation_attribute() {
        assert_eq!(Mutation::remove("tags").attribute(), "tags");
        assert_eq!(
            Mutation::set("tags", Attribute::Ss(BTreeSet::new())).attribute(),
            "tags"
        );
    }
}
