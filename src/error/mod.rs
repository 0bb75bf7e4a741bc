//! Error handling for labskill.
//!
//! This module provides:
//! - [`SkillError`]: The main error enum for all labskill operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestion and context

mod codes;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for labskill operations.
#[derive(Error, Debug)]
pub enum SkillError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{language} parse error at line {line}, column {column}: {message}")]
    Parse {
        language: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown language key: {0}")]
    UnknownLanguage(String),

    #[error("Lab '{lab}' has no step skills to weight")]
    EmptyCorpus { lab: String },

    #[error("Skill universe is empty for lab '{0}'")]
    EmptyUniverse(String),

    #[error("Invalid lab manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("Lab manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl SkillError {
    /// Build a parse error for `language` at a zero-based tree-sitter position.
    pub fn parse(language: impl Into<String>, row: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            line: row + 1,
            column: column + 1,
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Parse { .. } => ErrorCode::SourceParseError,
            Self::UnknownLanguage(_) => ErrorCode::UnknownLanguage,
            Self::EmptyCorpus { .. } => ErrorCode::EmptyCorpus,
            Self::EmptyUniverse(_) => ErrorCode::EmptyUniverse,
            Self::InvalidManifest { .. } => ErrorCode::ManifestInvalid,
            Self::ManifestNotFound(_) => ErrorCode::ManifestNotFound,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Parse {
                language,
                line,
                column,
                ..
            } => Some(serde_json::json!({
                "language": language,
                "line": line,
                "column": column,
            })),
            Self::UnknownLanguage(key) => Some(serde_json::json!({ "language": key })),
            Self::EmptyCorpus { lab } => Some(serde_json::json!({ "lab": lab })),
            Self::EmptyUniverse(lab) => Some(serde_json::json!({ "lab": lab })),
            Self::InvalidManifest { path, reason } => {
                Some(serde_json::json!({ "path": path, "reason": reason }))
            }
            Self::ManifestNotFound(path) => Some(serde_json::json!({ "path": path })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_skill_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted on stdout in JSON mode so batch drivers can react to failures
/// without scraping stderr.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "SOURCE_PARSE_ERROR")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "extraction", "weighting")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`SkillError`].
    #[must_use]
    pub fn from_skill_error(err: &SkillError) -> Self {
        let code = err.code();
        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion: code.suggestion().to_string(),
            context: err.context(),
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Set a custom suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<SkillError> for StructuredError {
    fn from(err: SkillError) -> Self {
        Self::from_skill_error(&err)
    }
}

impl From<&SkillError> for StructuredError {
    fn from(err: &SkillError) -> Self {
        Self::from_skill_error(err)
    }
}

/// Result type alias using [`SkillError`].
pub type Result<T> = std::result::Result<T, SkillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_error_code_mapping() {
        assert_eq!(
            SkillError::parse("python", 0, 0, "unexpected token").code(),
            ErrorCode::SourceParseError
        );
        assert_eq!(
            SkillError::EmptyCorpus { lab: "lab-1".into() }.code(),
            ErrorCode::EmptyCorpus
        );
        assert_eq!(
            SkillError::Config("bad".into()).code(),
            ErrorCode::ConfigInvalid
        );
        assert_eq!(
            SkillError::UnknownLanguage("cobol".into()).code(),
            ErrorCode::UnknownLanguage
        );
    }

    #[test]
    fn test_parse_error_positions_are_one_based() {
        let err = SkillError::parse("python", 2, 4, "invalid syntax");
        match &err {
            SkillError::Parse { line, column, .. } => {
                assert_eq!(*line, 3);
                assert_eq!(*column, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "python parse error at line 3, column 5: invalid syntax"
        );
    }

    #[test]
    fn test_skill_error_context() {
        let err = SkillError::EmptyCorpus { lab: "my-lab".into() };
        let ctx = err.context().unwrap();
        assert_eq!(ctx.get("lab").unwrap(), "my-lab");

        assert!(SkillError::InvalidInput("x".into()).context().is_none());
    }

    #[test]
    fn test_structured_error_from_skill_error() {
        let err = SkillError::parse("python", 0, 7, "missing ')'");
        let structured = StructuredError::from_skill_error(&err);

        assert_eq!(structured.code, ErrorCode::SourceParseError);
        assert_eq!(structured.numeric_code, 101);
        assert!(structured.message.contains("missing ')'"));
        assert!(!structured.suggestion.is_empty());
        assert!(structured.recoverable);
        assert_eq!(structured.category, "extraction");
        let ctx = structured.context.unwrap();
        assert_eq!(ctx["line"], 1);
        assert_eq!(ctx["column"], 8);
    }

    #[test]
    fn test_structured_error_serialization() {
        let err = StructuredError::new(ErrorCode::EmptyCorpus, "Lab 'x' has no step skills");
        let json = serde_json::to_string(&err).unwrap();

        assert!(json.contains("EMPTY_CORPUS"));
        assert!(json.contains("\"numeric_code\":201"));
        assert!(json.contains("\"category\":\"weighting\""));
        assert!(!json.contains("\"context\""));
    }

    #[test]
    fn test_structured_error_display() {
        let err = StructuredError::new(ErrorCode::UnknownLanguage, "Unknown language key: cobol");
        let display = format!("{err}");
        assert!(display.contains("E102"));
        assert!(display.contains("cobol"));
    }

    #[test]
    fn test_from_trait_implementations() {
        let err = SkillError::NotFound("lab".into());
        let structured: StructuredError = (&err).into();
        assert_eq!(structured.code, ErrorCode::NotFound);

        let owned: StructuredError = SkillError::MissingConfig("lab.manifest".into()).into();
        assert_eq!(owned.code, ErrorCode::ConfigMissingRequired);
        assert_eq!(owned.context.unwrap()["config_key"], "lab.manifest");
    }
}
