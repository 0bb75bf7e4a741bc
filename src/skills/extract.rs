//! Skill extraction facade.

use tracing::trace;

use crate::error::Result;
use crate::skills::language::LanguageKey;
use crate::skills::registry;
use crate::skills::tag::SkillSet;

/// A classifier turning source text into skill tags for one language.
pub trait SkillExtractor: Send + Sync {
    /// Language (and tag namespace) this extractor serves.
    fn language(&self) -> LanguageKey;

    /// Extract the skills demonstrated by `text`.
    ///
    /// Pattern extractors never fail; the syntax-tree extractor fails with
    /// [`crate::error::SkillError::Parse`] on invalid source.
    fn extract(&self, text: &str) -> Result<SkillSet>;
}

/// Extract skills from `text` with the profile registered for `language`.
pub fn extract_skills(language: LanguageKey, text: &str) -> Result<SkillSet> {
    let profile = registry::profile(language);
    let skills = profile.extractor().extract(text)?;
    trace!(language = %language, count = skills.len(), "extracted skills");
    Ok(skills)
}
