//! Merging extracted skills into a step's authored list.

use std::collections::BTreeSet;

use crate::skills::tag::SkillSet;

/// Result of aggregating one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Sorted, deduplicated list to persist.
    pub skills: Vec<String>,
    /// Whether `skills` differs from the authored list.
    pub changed: bool,
}

impl Aggregation {
    fn from_set(authored: &[String], set: BTreeSet<String>) -> Self {
        let skills: Vec<String> = set.into_iter().collect();
        let changed = skills != authored;
        Self { skills, changed }
    }
}

/// Union of the authored skills with freshly extracted ones, sorted.
#[must_use]
pub fn extend_skills(authored: &[String], extracted: &SkillSet) -> Aggregation {
    let merged = authored
        .iter()
        .cloned()
        .chain(extracted.iter().cloned())
        .collect();
    Aggregation::from_set(authored, merged)
}

/// Sort and deduplicate the authored skills without extraction.
#[must_use]
pub fn dedupe_skills(authored: &[String]) -> Aggregation {
    Aggregation::from_set(authored, authored.iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn extend_unions_and_sorts() {
        let authored = owned(&["python/strings", "python/lists"]);
        let extracted: SkillSet = ["python/lists", "python/for_loops"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let result = extend_skills(&authored, &extracted);
        assert_eq!(
            result.skills,
            owned(&["python/for_loops", "python/lists", "python/strings"])
        );
        assert!(result.changed);
    }

    #[test]
    fn extend_is_idempotent() {
        let extracted: SkillSet = ["js/arrays", "js/loops"].iter().map(ToString::to_string).collect();
        let once = extend_skills(&owned(&["js/loops", "html/forms"]), &extracted);
        let twice = extend_skills(&once.skills, &extracted);
        assert_eq!(once.skills, twice.skills);
        assert!(!twice.changed);
    }

    #[test]
    fn dedupe_only_sorts_and_drops_duplicates() {
        let authored = owned(&["b/x", "a/y", "b/x"]);
        let result = dedupe_skills(&authored);
        assert_eq!(result.skills, owned(&["a/y", "b/x"]));
        assert!(result.changed);
    }

    #[test]
    fn sorted_list_is_unchanged() {
        let authored = owned(&["a/y", "b/x"]);
        assert!(!dedupe_skills(&authored).changed);
        assert!(!extend_skills(&authored, &SkillSet::new()).changed);
    }

    #[test]
    fn sort_is_byte_order() {
        let result = dedupe_skills(&owned(&["python/lists", "Python/lists", "_x/y"]));
        assert_eq!(result.skills, owned(&["Python/lists", "_x/y", "python/lists"]));
    }
}
