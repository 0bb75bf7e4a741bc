//! Merging and removal invariants over arbitrary tag lists.

use std::collections::BTreeSet;

use proptest::prelude::*;

use labskill::{SkillSet, dedupe_skills, extend_skills, remove_namespace};

fn arb_tag() -> impl Strategy<Value = String> {
    ("(python|js|go)", "[a-z_]{1,8}").prop_map(|(ns, id)| format!("{ns}/{id}"))
}

fn arb_tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_tag(), 0..12)
}

proptest! {
    #[test]
    fn extend_is_idempotent(authored in arb_tags(), extracted in prop::collection::btree_set(arb_tag(), 0..8)) {
        let first = extend_skills(&authored, &extracted);
        let second = extend_skills(&first.skills, &extracted);
        prop_assert!(!second.changed);
        prop_assert_eq!(&second.skills, &first.skills);
    }

    #[test]
    fn extend_keeps_every_tag(authored in arb_tags(), extracted in prop::collection::btree_set(arb_tag(), 0..8)) {
        let merged = extend_skills(&authored, &extracted);
        let expected: SkillSet = authored.iter().cloned().chain(extracted.iter().cloned()).collect();
        let actual: SkillSet = merged.skills.iter().cloned().collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(merged.skills.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dedupe_preserves_content(authored in arb_tags()) {
        let deduped = dedupe_skills(&authored);
        let before: BTreeSet<&String> = authored.iter().collect();
        let after: BTreeSet<&String> = deduped.skills.iter().collect();
        prop_assert_eq!(before, after.clone());
        prop_assert_eq!(deduped.skills.len(), after.len());
    }

    #[test]
    fn removal_only_drops_the_namespace(mut steps in prop::collection::vec(arb_tags(), 0..5)) {
        let original = steps.clone();
        let removed = remove_namespace(&mut steps, "python");
        prop_assert_eq!(removed, original.iter().flatten().any(|t| t.starts_with("python/")));
        for (before, after) in original.iter().zip(&steps) {
            let kept: Vec<&String> = before.iter().filter(|t| !t.starts_with("python/")).collect();
            prop_assert_eq!(after.iter().collect::<Vec<_>>(), kept);
        }
    }
}
