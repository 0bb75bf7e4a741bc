//! Skill tag helpers.
//!
//! A skill tag is a `"<namespace>/<id>"` string. Tags are compared exactly
//! and case-sensitively; the helpers here only split and test prefixes.

use std::collections::BTreeSet;

/// Sorted, deduplicated set of skill tags produced by extraction.
pub type SkillSet = BTreeSet<String>;

/// Separator between namespace and id.
pub const SEPARATOR: char = '/';

/// Namespace part of a tag (`"python/lists"` -> `"python"`).
///
/// Tags without a separator have no namespace.
#[must_use]
pub fn namespace(tag: &str) -> Option<&str> {
    tag.split_once(SEPARATOR).map(|(ns, _)| ns)
}

/// Id part of a tag (`"python/lists"` -> `"lists"`).
#[must_use]
pub fn id(tag: &str) -> Option<&str> {
    tag.split_once(SEPARATOR).map(|(_, id)| id)
}

/// Whether `tag` lives under `prefix` (`"python"` matches `"python/lists"`
/// but not `"pythonic/x"` or `"python"` itself).
#[must_use]
pub fn has_prefix(tag: &str, prefix: &str) -> bool {
    let prefix = normalize_prefix(prefix);
    tag.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Strip any trailing separators so `"python/"` and `"python"` behave alike.
#[must_use]
pub fn normalize_prefix(prefix: &str) -> &str {
    prefix.trim_end_matches(SEPARATOR)
}

/// A tag is well formed when it has a non-empty namespace and id.
#[must_use]
pub fn is_well_formed(tag: &str) -> bool {
    matches!(tag.split_once(SEPARATOR), Some((ns, id)) if !ns.is_empty() && !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_namespace_and_id() {
        assert_eq!(namespace("python/lists"), Some("python"));
        assert_eq!(id("python/lists"), Some("lists"));
        assert_eq!(namespace("plain"), None);
        // Only the first separator splits.
        assert_eq!(id("linux/cd/pwd"), Some("cd/pwd"));
    }

    #[test]
    fn prefix_requires_separator_boundary() {
        assert!(has_prefix("python/lists", "python"));
        assert!(has_prefix("python/lists", "python/"));
        assert!(!has_prefix("pythonic/lists", "python"));
        assert!(!has_prefix("python", "python"));
        assert!(!has_prefix("Python/lists", "python"));
    }

    #[test]
    fn well_formed_tags() {
        assert!(is_well_formed("js/arrays"));
        assert!(!is_well_formed("js/"));
        assert!(!is_well_formed("/arrays"));
        assert!(!is_well_formed("arrays"));
    }
}
