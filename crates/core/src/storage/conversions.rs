//! Mapping between [`Favorite`] and the generic [`Record`] layout.

use std::collections::BTreeSet;

use crate::favorite::Favorite;

use super::{Attribute, RepositoryError, Result, Record, PARTITION_KEY, SORT_KEY, TAGS_ATTRIBUTE};

/// Builds the stored record for a favorite. Empty tag sets are omitted.
pub fn favorite_to_record(favorite: &Favorite) -> Record {
    let mut record = Record::new();
    record.insert(
        PARTITION_KEY.to_string(),
        Attribute::S(favorite.owner.clone()),
    );
    record.insert(SORT_KEY.to_string(), Attribute::S(favorite.id.clone()));
    if !favorite.tags.is_empty() {
        record.insert(
            TAGS_ATTRIBUTE.to_string(),
            Attribute::Ss(favorite.tags.clone()),
        );
    }
    record
}

/// Reads a favorite back from a stored record. A missing tags attribute is
/// the empty set.
pub fn record_to_favorite(record: &Record) -> Result<Favorite> {
    let owner = require_string(record, PARTITION_KEY)?;
    let id = require_string(record, SORT_KEY)?;
    let tags = match record.get(TAGS_ATTRIBUTE) {
        None => BTreeSet::new(),
        Some(Attribute::Ss(tags)) => tags.clone(),
        Some(_) => {
            return Err(RepositoryError::InvalidData(format!(
                "{TAGS_ATTRIBUTE} is not a string set"
            )))
        }
    };

    Ok(Favorite { id, owner, tags })
}

fn require_string(record: &Record, name: &str) -> Result<String> {
    match record.get(name) {
        Some(Attribute::S(value)) => Ok(value.clone()),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "{name} is not a string"
        ))),
        None => Err(RepositoryError::InvalidData(format!("missing {name}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_to_record_without_tags_omits_attribute() {
        let record = favorite_to_record(&Favorite::new("u1", "g1"));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(PARTITION_KEY), Some(&Attribute::S("u1".to_string())));
        assert_eq!(record.get(SORT_KEY), Some(&Attribute::S("g1".to_string())));
        assert!(!record.contains_key(TAGS_ATTRIBUTE));
    }

    #[test]
    fn test_favorite_to_record_with_tags() {
        let record = favorite_to_record(&Favorite::new("u1", "g1").with_tags(["cats"]));
        let tags = record.get(TAGS_ATTRIBUTE).and_then(Attribute::as_ss);

        assert_eq!(tags, Some(&BTreeSet::from(["cats".to_string()])));
    }

    #[test]
    fn test_record_to_favorite_missing_tags_is_empty() {
        let record = favorite_to_record(&Favorite::new("u1", "g1"));
        let favorite = record_to_favorite(&record).unwrap();

        assert_eq!(favorite, Favorite::new("u1", "g1"));
    }

    #[test]
    fn test_record_to_favorite_rejects_wrong_tag_type() {
        let mut record = favorite_to_record(&Favorite::new("u1", "g1"));
        record.insert(TAGS_ATTRIBUTE.to_string(), Attribute::S("cats".to_string()));

        assert!(matches!(
            record_to_favorite(&record),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_record_to_favorite_requires_keys() {
        let mut record = Record::new();
        record.insert(PARTITION_KEY.to_string(), Attribute::S("u1".to_string()));

        assert_eq!(
            record_to_favorite(&record),
            Err(RepositoryError::InvalidData("missing sk".to_string()))
        );
    }
}
