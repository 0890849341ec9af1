use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A user's saved reference to an external GIF.
///
/// `(owner, id)` identifies at most one favorite. The tag set is a real set:
/// duplicates are impossible and ordering carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Caller-supplied identifier, unique within the owner's collection.
    pub id: String,
    /// Verified user identifier this favorite belongs to.
    #[serde(rename = "user")]
    pub owner: String,
    /// Free-text labels. A favorite without tags has an empty set.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Favorite {
    /// Creates an untagged favorite.
    pub fn new(owner: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Replaces the tag set. Duplicate inputs collapse.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true when `tag` is a member of the tag set (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_tags_collapses_duplicates() {
        let favorite = Favorite::new("u1", "g1").with_tags(["cats", "funny", "cats"]);

        assert_eq!(favorite.tags.len(), 2);
        assert!(favorite.has_tag("cats"));
        assert!(favorite.has_tag("funny"));
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let favorite = Favorite::new("u1", "g1").with_tags(["CATS"]);

        assert!(favorite.has_tag("CATS"));
        assert!(!favorite.has_tag("cats"));
    }

    #[test]
    fn test_serializes_owner_as_user() {
        let favorite = Favorite::new("foo@bar.com", "12345").with_tags(["foo", "bar"]);
        let json = serde_json::to_value(&favorite).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "12345",
                "user": "foo@bar.com",
                "tags": ["bar", "foo"],
            })
        );
    }

    #[test]
    fn test_deserializes_without_tags() {
        let favorite: Favorite =
            serde_json::from_str(r#"{"id": "12345", "user": "foo@bar.com"}"#).unwrap();

        assert_eq!(favorite, Favorite::new("foo@bar.com", "12345"));
        assert!(favorite.tags.is_empty());
    }
}
