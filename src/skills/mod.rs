//! Skill extraction: language keys, tags, and the per-language extractors.

pub mod ast;
pub mod extract;
pub mod language;
pub mod patterns;
pub mod registry;
pub mod tag;

pub use extract::{SkillExtractor, extract_skills};
pub use language::LanguageKey;
pub use registry::{ExtractorKind, LanguageProfile, profile, profiles};
pub use tag::SkillSet;
