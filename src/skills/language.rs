//! Language keys.
//!
//! Every supported source language or library dialect has exactly one
//! [`LanguageKey`]. The key doubles as the namespace of the tags its profile
//! emits (`LanguageKey::Pandas` emits `pandas/*`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillError;

/// Closed set of languages with a skill profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKey {
    Python,
    Pandas,
    Numpy,
    Matplotlib,
    Sklearn,
    Django,
    Flask,
    Pygame,
    Tkinter,
    Js,
    Typescript,
    React,
    Jquery,
    Html,
    Css,
    C,
    Cpp,
    Java,
    Go,
    Rust,
    Sql,
    Mysql,
    Shell,
    Linux,
    Git,
    Docker,
}

impl LanguageKey {
    /// All keys in registry order.
    pub const ALL: [Self; 26] = [
        Self::Python,
        Self::Pandas,
        Self::Numpy,
        Self::Matplotlib,
        Self::Sklearn,
        Self::Django,
        Self::Flask,
        Self::Pygame,
        Self::Tkinter,
        Self::Js,
        Self::Typescript,
        Self::React,
        Self::Jquery,
        Self::Html,
        Self::Css,
        Self::C,
        Self::Cpp,
        Self::Java,
        Self::Go,
        Self::Rust,
        Self::Sql,
        Self::Mysql,
        Self::Shell,
        Self::Linux,
        Self::Git,
        Self::Docker,
    ];

    /// Canonical lowercase key, also the tag namespace.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Pandas => "pandas",
            Self::Numpy => "numpy",
            Self::Matplotlib => "matplotlib",
            Self::Sklearn => "sklearn",
            Self::Django => "django",
            Self::Flask => "flask",
            Self::Pygame => "pygame",
            Self::Tkinter => "tkinter",
            Self::Js => "js",
            Self::Typescript => "typescript",
            Self::React => "react",
            Self::Jquery => "jquery",
            Self::Html => "html",
            Self::Css => "css",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Sql => "sql",
            Self::Mysql => "mysql",
            Self::Shell => "shell",
            Self::Linux => "linux",
            Self::Git => "git",
            Self::Docker => "docker",
        }
    }

    /// Namespace used for this language's tags.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageKey {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = match lowered.as_str() {
            "python" | "py" | "python3" => Self::Python,
            "pandas" => Self::Pandas,
            "numpy" => Self::Numpy,
            "matplotlib" => Self::Matplotlib,
            "sklearn" | "scikit-learn" => Self::Sklearn,
            "django" => Self::Django,
            "flask" => Self::Flask,
            "pygame" => Self::Pygame,
            "tkinter" => Self::Tkinter,
            "js" | "javascript" => Self::Js,
            "typescript" | "ts" => Self::Typescript,
            "react" | "reactjs" => Self::React,
            "jquery" => Self::Jquery,
            "html" => Self::Html,
            "css" => Self::Css,
            "c" => Self::C,
            "cpp" | "c++" => Self::Cpp,
            "java" => Self::Java,
            "go" | "golang" => Self::Go,
            "rust" => Self::Rust,
            "sql" => Self::Sql,
            "mysql" => Self::Mysql,
            "shell" | "bash" => Self::Shell,
            "linux" => Self::Linux,
            "git" => Self::Git,
            "docker" => Self::Docker,
            _ => return Err(SkillError::UnknownLanguage(s.to_string())),
        };
        Ok(key)
    }
}
