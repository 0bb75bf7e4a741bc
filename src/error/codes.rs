//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Extraction errors
//! - 2xx: Weighting errors
//! - 3xx: Config errors
//! - 4xx: Manifest errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `SourceParseError` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Extraction errors (1xx)
    // ========================================
    /// E101: Source text could not be parsed by the syntax-tree extractor
    SourceParseError,
    /// E102: Language key has no registered profile
    UnknownLanguage,

    // ========================================
    // Weighting errors (2xx)
    // ========================================
    /// E201: No step skills to compute proportions from
    EmptyCorpus,
    /// E202: No skill universe supplied for weighting
    EmptyUniverse,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Manifest errors (4xx)
    // ========================================
    /// E401: Lab manifest could not be found
    ManifestNotFound,
    /// E402: Lab manifest is not valid JSON of the expected shape
    ManifestInvalid,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Invalid command-line input
    InvalidInput,
    /// E905: Generic not found (catch-all)
    NotFound,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SourceParseError` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::SourceParseError => 101,
            Self::UnknownLanguage => 102,

            Self::EmptyCorpus => 201,
            Self::EmptyUniverse => 202,

            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::ManifestNotFound => 401,
            Self::ManifestInvalid => 402,

            Self::SerializationError => 605,

            Self::InvalidInput => 901,
            Self::NotFound => 905,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SourceParseError => "Fix the syntax error in the code block, or tag the fence with a language the block is actually written in",
            Self::UnknownLanguage => "Run `labskill languages` to list the supported language keys",

            Self::EmptyCorpus => "Tag the lab steps first with `labskill tag --lang <key> <lab>`",
            Self::EmptyUniverse => "Pass --skill <tag> or add a top-level `skills` list to the lab manifest",

            Self::ConfigInvalid => "Check TOML syntax in the config file and the LABSKILL_* environment variables",
            Self::ConfigMissingRequired => "Set the missing value in labskill.toml or via its LABSKILL_* environment variable",

            Self::ManifestNotFound => "Point the command at a lab directory that contains index.json",
            Self::ManifestInvalid => "Check that index.json is valid JSON with a `details.steps` array",

            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::InvalidInput => "Run the command with --help to see the accepted arguments",
            Self::NotFound => "The requested resource was not found. Check the path or identifier",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::SourceParseError
            | Self::UnknownLanguage
            | Self::EmptyCorpus
            | Self::EmptyUniverse
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::ManifestNotFound
            | Self::ManifestInvalid
            | Self::InvalidInput
            | Self::NotFound
            | Self::IoError => true,

            Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "extraction",
            2 => "weighting",
            3 => "config",
            4 => "manifest",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::SourceParseError,
            Self::UnknownLanguage,
            Self::EmptyCorpus,
            Self::EmptyUniverse,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::ManifestNotFound,
            Self::ManifestInvalid,
            Self::SerializationError,
            Self::InvalidInput,
            Self::NotFound,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_numeric() {
        assert_eq!(ErrorCode::SourceParseError.numeric(), 101);
        assert_eq!(ErrorCode::EmptyCorpus.numeric(), 201);
        assert_eq!(ErrorCode::ConfigInvalid.numeric(), 302);
        assert_eq!(ErrorCode::ManifestNotFound.numeric(), 401);
        assert_eq!(ErrorCode::IoError.numeric(), 906);
    }

    #[test]
    fn test_error_code_string() {
        assert_eq!(ErrorCode::SourceParseError.code_string(), "E101");
        assert_eq!(ErrorCode::EmptyCorpus.code_string(), "E201");
    }

    #[test]
    fn test_all_codes_have_suggestions_and_categories() {
        for code in ErrorCode::all() {
            assert!(!code.suggestion().is_empty(), "{code:?} has empty suggestion");
            assert_ne!(code.category(), "unknown", "{code:?} has invalid category");
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::EmptyCorpus).unwrap();
        assert_eq!(json, "\"EMPTY_CORPUS\"");

        let deserialized: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ErrorCode::EmptyCorpus);
    }

    #[test]
    fn test_no_duplicate_numeric_codes() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::all() {
            assert!(seen.insert(code.numeric()), "Duplicate numeric code: {}", code.numeric());
        }
    }

    #[test]
    fn test_category_assignment() {
        assert_eq!(ErrorCode::UnknownLanguage.category(), "extraction");
        assert_eq!(ErrorCode::EmptyUniverse.category(), "weighting");
        assert_eq!(ErrorCode::ConfigMissingRequired.category(), "config");
        assert_eq!(ErrorCode::ManifestInvalid.category(), "manifest");
        assert_eq!(ErrorCode::SerializationError.category(), "storage");
        assert_eq!(ErrorCode::InvalidInput.category(), "internal");
    }
}
