//! Lab discovery and step source reading.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, SkillError};
use crate::lab::locator::{join_sources, locate_code};
use crate::lab::manifest::StepEntry;
use crate::skills::registry::LanguageProfile;

/// Directory under a lab holding solution files.
pub const SOLUTIONS_DIR: &str = "solutions";

/// Lab directories under `paths`.
///
/// A path holding a manifest is a lab itself; other directories are searched
/// up to `max_depth` levels for manifests. Results are sorted and unique.
pub fn discover_labs(paths: &[PathBuf], manifest: &str, max_depth: usize) -> Result<Vec<PathBuf>> {
    let mut labs = BTreeSet::new();
    for path in paths {
        if !path.exists() {
            return Err(SkillError::NotFound(path.display().to_string()));
        }
        if path.is_file() {
            if path.file_name().is_some_and(|name| name == manifest) {
                labs.insert(path.parent().unwrap_or(Path::new(".")).to_path_buf());
                continue;
            }
            return Err(SkillError::InvalidInput(format!(
                "{} is neither a lab directory nor a {manifest}",
                path.display()
            )));
        }
        if path.join(manifest).is_file() {
            labs.insert(path.clone());
            continue;
        }
        for entry in WalkDir::new(path)
            .max_depth(max_depth)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && entry.file_name() == manifest {
                if let Some(dir) = entry.path().parent() {
                    labs.insert(dir.to_path_buf());
                }
            }
        }
    }
    debug!(count = labs.len(), "discovered labs");
    Ok(labs.into_iter().collect())
}

/// Location of a solution file: `solutions/<name>`, else `<name>` in the lab.
#[must_use]
pub fn solution_path(lab_dir: &Path, name: &str) -> PathBuf {
    let nested = lab_dir.join(SOLUTIONS_DIR).join(name);
    if nested.exists() {
        nested
    } else {
        lab_dir.join(name)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Code of one step for `profile`.
///
/// The step text goes through the fence locator with `aliases`. Solution
/// files the profile accepts are read raw, markdown solutions go through the
/// locator, and anything else is skipped. Pieces are joined with `\n`.
pub fn step_code(
    lab_dir: &Path,
    step: &StepEntry,
    profile: &LanguageProfile,
    aliases: &[String],
    include_solutions: bool,
) -> Result<String> {
    let mut parts = Vec::new();

    if let Some(text) = &step.text {
        let path = lab_dir.join(text);
        let document = fs::read_to_string(&path)
            .map_err(|err| SkillError::NotFound(format!("{}: {err}", path.display())))?;
        parts.push(locate_code(&document, aliases));
    }

    if include_solutions {
        for name in &step.solutions {
            let path = solution_path(lab_dir, name);
            if profile.accepts_source(&path) {
                parts.push(fs::read_to_string(&path)?);
            } else if is_markdown(&path) {
                parts.push(locate_code(&fs::read_to_string(&path)?, aliases));
            } else {
                warn!(file = %path.display(), language = %profile.key(), "skipping solution file");
            }
        }
    }

    Ok(join_sources(parts))
}
