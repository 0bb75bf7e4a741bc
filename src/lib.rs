pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod lab;
pub mod skills;
pub mod test_utils;

pub use error::{Result, SkillError};
pub use lab::{
    calculate_weights, dedupe_skills, extend_skills, locate_code, remove_namespace,
};
pub use skills::{LanguageKey, SkillSet, extract_skills};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
