//! Lab manifest (`index.json`) model.
//!
//! Only the fields the pipeline reads are typed; everything else is kept in
//! `extra` maps, so rewriting a manifest keeps unknown fields (in their
//! original relative order) after the typed ones.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SkillError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Skill universe used for weighting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    pub details: LabDetails,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabDetails {
    #[serde(default)]
    pub steps: Vec<StepEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Markdown file holding the step text, relative to the lab directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Solution file names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LabManifest {
    pub fn from_json_str(input: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| SkillError::InvalidManifest {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SkillError::ManifestNotFound(path.to_path_buf()));
        }
        let input = fs::read_to_string(path)?;
        Self::from_json_str(&input, path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Each step's skill list as authored.
    #[must_use]
    pub fn step_skills(&self) -> Vec<Vec<String>> {
        self.details
            .steps
            .iter()
            .map(|step| step.skills.clone())
            .collect()
    }

    /// Replace every step's skill list, in step order.
    pub fn set_step_skills(&mut self, lists: Vec<Vec<String>>) -> Result<()> {
        if lists.len() != self.details.steps.len() {
            return Err(SkillError::InvalidInput(format!(
                "expected {} step skill lists, got {}",
                self.details.steps.len(),
                lists.len()
            )));
        }
        for (step, skills) in self.details.steps.iter_mut().zip(lists) {
            step.skills = skills;
        }
        Ok(())
    }
}
