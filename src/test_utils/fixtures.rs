//! Temporary lab directories for tests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::lab::sources::SOLUTIONS_DIR;

/// One step of a fixture lab.
#[derive(Debug, Clone, Default)]
pub struct StepFixture {
    /// Step markdown file name, written next to the manifest.
    pub file: &'static str,
    pub markdown: &'static str,
    pub skills: &'static [&'static str],
    /// `(name, content)` pairs written under `solutions/`.
    pub solutions: &'static [(&'static str, &'static str)],
}

/// A temporary directory holding one or more labs.
///
/// Labs are addressed by a path relative to the root; `""` is the root
/// itself.
pub struct LabFixture {
    temp_dir: TempDir,
    manifest: String,
}

impl LabFixture {
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
            manifest: "index.json".to_string(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    #[must_use]
    pub fn lab_dir(&self, lab: &str) -> PathBuf {
        self.root().join(lab)
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics on filesystem errors.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Write a raw manifest document for `lab`.
    ///
    /// # Panics
    ///
    /// Panics on serialization or filesystem errors.
    pub fn manifest(&self, lab: &str, manifest: &Value) -> PathBuf {
        let text = serde_json::to_string_pretty(manifest).expect("failed to serialize manifest");
        self.write(Path::new(lab).join(&self.manifest), &text)
    }

    /// Build a lab: step files, solutions and a manifest that lists them.
    ///
    /// `universe` becomes the manifest's top-level `skills` when given.
    pub fn lab(
        &self,
        lab: &str,
        title: &str,
        universe: Option<&[&str]>,
        steps: &[StepFixture],
    ) -> PathBuf {
        let dir = Path::new(lab);
        let mut entries = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            let mut entry = json!({
                "title": format!("Step {}", index + 1),
                "skills": step.skills,
            });
            if !step.file.is_empty() {
                self.write(dir.join(step.file), step.markdown);
                entry["text"] = json!(step.file);
            }
            if !step.solutions.is_empty() {
                for (name, content) in step.solutions {
                    self.write(dir.join(SOLUTIONS_DIR).join(name), content);
                }
                let names: Vec<&str> = step.solutions.iter().map(|(name, _)| *name).collect();
                entry["solutions"] = json!(names);
            }
            entries.push(entry);
        }

        let mut manifest = json!({
            "title": title,
            "type": "lab",
            "details": { "steps": entries },
        });
        if let Some(skills) = universe {
            manifest["skills"] = json!(skills);
        }
        self.manifest(lab, &manifest);
        self.lab_dir(lab)
    }

    /// Parsed manifest of `lab`.
    ///
    /// # Panics
    ///
    /// Panics when the manifest is missing or not JSON.
    #[must_use]
    pub fn read_manifest(&self, lab: &str) -> Value {
        let path = self.lab_dir(lab).join(&self.manifest);
        let text = fs::read_to_string(&path).expect("failed to read manifest");
        serde_json::from_str(&text).expect("manifest is not JSON")
    }

    /// Skill lists of every step in `lab`, as written on disk.
    #[must_use]
    pub fn step_skills(&self, lab: &str) -> Vec<Vec<String>> {
        self.read_manifest(lab)["details"]["steps"]
            .as_array()
            .map(|steps| {
                steps
                    .iter()
                    .map(|step| {
                        step["skills"]
                            .as_array()
                            .map(|skills| {
                                skills
                                    .iter()
                                    .filter_map(|s| s.as_str().map(ToString::to_string))
                                    .collect()
                            })
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for LabFixture {
    fn default() -> Self {
        Self::new()
    }
}
