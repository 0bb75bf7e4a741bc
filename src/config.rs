use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::output::OutputFormat;
use crate::error::{Result, SkillError};
use crate::skills::language::LanguageKey;
use crate::skills::registry;

/// Project-local config file name, looked up in the working directory.
pub const PROJECT_FILE: &str = "labskill.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lab: LabConfig,
    #[serde(default)]
    pub fences: FencesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LABSKILL_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SkillError::MissingConfig(path.display().to_string()));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch)?;
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global)?;
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_FILE))? {
                config.merge_patch(project)?;
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("labskill/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SkillError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = Self::parse_patch(&raw)
            .map_err(|err| SkillError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn parse_patch(raw: &str) -> std::result::Result<ConfigPatch, toml::de::Error> {
        toml::from_str(raw)
    }

    fn merge_patch(&mut self, patch: ConfigPatch) -> Result<()> {
        if let Some(patch) = patch.lab {
            self.lab.merge(patch);
        }
        if let Some(patch) = patch.fences {
            self.fences.merge(patch)?;
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `LABSKILL_*` overrides read through `lookup`.
    pub fn apply_env_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let env = Env(&lookup);

        if let Some(value) = env.string("LABSKILL_MANIFEST") {
            self.lab.manifest = value;
        }
        if let Some(value) = env.bool("LABSKILL_INCLUDE_SOLUTIONS") {
            self.lab.include_solutions = value;
        }
        if let Some(value) = env.usize("LABSKILL_MAX_DEPTH")? {
            self.lab.max_depth = value;
        }
        if let Some(value) = env.string("LABSKILL_OUTPUT_FORMAT") {
            self.output.format = parse_format(&value)?;
        }
        for key in LanguageKey::ALL {
            let var = format!("LABSKILL_FENCES_{}", key.as_str().to_ascii_uppercase());
            if let Some(values) = env.list(&var) {
                self.fences.overrides.insert(key, values);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Manifest file name marking a lab directory.
    #[serde(default)]
    pub manifest: String,
    /// Whether step solution files feed extraction.
    #[serde(default)]
    pub include_solutions: bool,
    /// Directory depth searched for manifests.
    #[serde(default)]
    pub max_depth: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            manifest: "index.json".to_string(),
            include_solutions: true,
            max_depth: 4,
        }
    }
}

impl LabConfig {
    fn merge(&mut self, patch: LabPatch) {
        if let Some(value) = patch.manifest {
            self.manifest = value;
        }
        if let Some(value) = patch.include_solutions {
            self.include_solutions = value;
        }
        if let Some(value) = patch.max_depth {
            self.max_depth = value;
        }
    }
}

/// Per-language fence alias overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FencesConfig {
    pub overrides: BTreeMap<LanguageKey, Vec<String>>,
}

impl FencesConfig {
    fn merge(&mut self, patch: HashMap<String, Vec<String>>) -> Result<()> {
        for (key, aliases) in patch {
            let language = key
                .parse::<LanguageKey>()
                .map_err(|_| SkillError::Config(format!("unknown language in [fences]: {key}")))?;
            self.overrides.insert(language, aliases);
        }
        Ok(())
    }

    /// Aliases for `key`: the override if set, else the profile defaults.
    #[must_use]
    pub fn aliases_for(&self, key: LanguageKey) -> Vec<String> {
        self.overrides.get(&key).cloned().unwrap_or_else(|| {
            registry::profile(key)
                .fence_aliases()
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub lab: Option<LabPatch>,
    pub fences: Option<HashMap<String, Vec<String>>>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LabPatch {
    pub manifest: Option<String>,
    pub include_solutions: Option<bool>,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        "plain" => Ok(OutputFormat::Plain),
        _ => Err(SkillError::Config(format!(
            "invalid output format {value} (expected human|json|plain)"
        ))),
    }
}

struct Env<'a, F: Fn(&str) -> Option<String>>(&'a F);

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    fn string(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    fn bool(&self, key: &str) -> Option<bool> {
        self.string(key)
            .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
    }

    fn usize(&self, key: &str) -> Result<Option<usize>> {
        match self.string(key) {
            Some(value) => value.parse::<usize>().map(Some).map_err(|err| {
                SkillError::Config(format!("invalid {key} value {value}: {err}"))
            }),
            None => Ok(None),
        }
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.string(key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(ToString::to_string)
                .collect()
        })
    }
}
