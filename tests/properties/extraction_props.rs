//! Extractors never panic and only emit tags in their own vocabulary.

use proptest::prelude::*;

use labskill::lab::locator::locate_code;
use labskill::skills::registry::profile;
use labskill::{LanguageKey, extract_skills};

fn arb_pattern_language() -> impl Strategy<Value = LanguageKey> {
    prop::sample::select(
        LanguageKey::ALL
            .into_iter()
            .filter(|key| *key != LanguageKey::Python)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn pattern_extraction_stays_in_vocabulary(language in arb_pattern_language(), text in ".{0,400}") {
        let skills = extract_skills(language, &text).unwrap();
        let vocabulary = profile(language).vocabulary();
        prop_assert!(skills.is_subset(&vocabulary));
    }

    #[test]
    fn python_extraction_never_panics(text in "[a-z0-9_ ():=\\[\\]{},.'\"\n+-]{0,200}") {
        if let Ok(skills) = extract_skills(LanguageKey::Python, &text) {
            let vocabulary = profile(LanguageKey::Python).vocabulary();
            prop_assert!(skills.is_subset(&vocabulary));
        }
    }

    #[test]
    fn locator_output_never_grows(doc in "(```[a-z]{0,6}\n|[a-z =]{0,20}\n){0,30}") {
        let aliases = vec!["python".to_string()];
        let code = locate_code(&doc, &aliases);
        prop_assert!(code.len() <= doc.len());
    }
}
