use std::collections::BTreeSet;

use super::types::Favorite;

/// Next persisted state of a tag set after a requested mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChange {
    /// The set already satisfies the request; nothing needs to be written.
    Unchanged,
    /// Persist this non-empty set.
    Set(BTreeSet<String>),
    /// The set became empty; the tags attribute must be dropped.
    Clear,
}

/// Computes the tag set after adding `tag`.
pub fn insert_tag(tags: &BTreeSet<String>, tag: &str) -> TagChange {
    if tags.contains(tag) {
        return TagChange::Unchanged;
    }
    let mut next = tags.clone();
    next.insert(tag.to_string());
    TagChange::Set(next)
}

/// Computes the tag set after removing `tag`.
pub fn remove_tag(tags: &BTreeSet<String>, tag: &str) -> TagChange {
    if !tags.contains(tag) {
        return TagChange::Unchanged;
    }
    let mut next = tags.clone();
    next.remove(tag);
    if next.is_empty() {
        TagChange::Clear
    } else {
        TagChange::Set(next)
    }
}

/// Normalizes a tag filter value. Only the filter is lower-cased; stored tags
/// are compared as-is.
pub fn normalize_tag_filter(tag: &str) -> String {
    tag.to_lowercase()
}

/// Keeps the favorites whose tag set contains the normalized `tag`.
///
/// Linear in the number of favorites.
pub fn filter_by_tag(favorites: Vec<Favorite>, tag: &str) -> Vec<Favorite> {
    let tag = normalize_tag_filter(tag);
    favorites
        .into_iter()
        .filter(|favorite| favorite.has_tag(&tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_insert_new_tag() {
        assert_eq!(
            insert_tag(&tags(&["funny"]), "cats"),
            TagChange::Set(tags(&["funny", "cats"]))
        );
    }

    #[test]
    fn test_insert_into_empty_set() {
        assert_eq!(
            insert_tag(&BTreeSet::new(), "cats"),
            TagChange::Set(tags(&["cats"]))
        );
    }

    #[test]
    fn test_insert_existing_tag_is_unchanged() {
        assert_eq!(insert_tag(&tags(&["cats"]), "cats"), TagChange::Unchanged);
    }

    #[test]
    fn test_remove_existing_tag() {
        assert_eq!(
            remove_tag(&tags(&["funny", "cats"]), "cats"),
            TagChange::Set(tags(&["funny"]))
        );
    }

    #[test]
    fn test_remove_last_tag_clears() {
        assert_eq!(remove_tag(&tags(&["cats"]), "cats"), TagChange::Clear);
    }

    #[test]
    fn test_remove_absent_tag_is_unchanged() {
        assert_eq!(remove_tag(&tags(&["funny"]), "cats"), TagChange::Unchanged);
        assert_eq!(remove_tag(&BTreeSet::new(), "cats"), TagChange::Unchanged);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert_eq!(
            insert_tag(&tags(&["cats"]), "CATS"),
            TagChange::Set(tags(&["cats", "CATS"]))
        );
        assert_eq!(remove_tag(&tags(&["cats"]), "CATS"), TagChange::Unchanged);
    }

    #[test]
    fn test_filter_lowercases_filter_value() {
        let favorites = vec![
            Favorite::new("u1", "g1").with_tags(["cats"]),
            Favorite::new("u1", "g2").with_tags(["dogs"]),
        ];

        let result = filter_by_tag(favorites, "CATS");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "g1");
    }

    #[test]
    fn test_filter_does_not_lowercase_stored_tags() {
        let favorites = vec![Favorite::new("u1", "g1").with_tags(["CATS"])];

        assert!(filter_by_tag(favorites.clone(), "cats").is_empty());
        assert!(filter_by_tag(favorites, "CATS").is_empty());
    }

    #[test]
    fn test_filter_skips_untagged() {
        let favorites = vec![Favorite::new("u1", "g1")];
        assert!(filter_by_tag(favorites, "cats").is_empty());
    }
}
