//! Lab-level operations: code location, skill aggregation, weighting,
//! namespace removal, and manifest I/O.

pub mod aggregate;
pub mod locator;
pub mod manifest;
pub mod removal;
pub mod sources;
pub mod weight;

pub use aggregate::{Aggregation, dedupe_skills, extend_skills};
pub use locator::locate_code;
pub use manifest::{LabManifest, StepEntry};
pub use removal::remove_namespace;
pub use weight::{SkillWeights, WeightedSkill, calculate_lab_weights, calculate_weights};
