use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, Result, SkillError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON wrapped in a response envelope
    Json,
    /// Plain text without colors, one record per line
    Plain,
}

impl OutputFormat {
    /// Resolve the format from global flags, falling back to the configured one.
    #[must_use]
    pub const fn from_args(json: bool, plain: bool, configured: Self) -> Self {
        if json {
            Self::Json
        } else if plain {
            Self::Plain
        } else {
            configured
        }
    }

    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    /// Rich error with structured information
    Error {
        /// Error code enum value (e.g., "SOURCE_PARSE_ERROR")
        code: ErrorCode,
        /// Numeric error code (e.g., 101)
        numeric_code: u16,
        /// Human-readable error message
        message: String,
        /// Actionable suggestion for recovery
        suggestion: String,
        /// Additional context for debugging
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        /// Whether this error is recoverable by the user
        recoverable: bool,
        /// Error category (e.g., "extraction", "manifest")
        category: String,
    },
    /// Batch where some labs failed.
    Partial { completed: usize, failed: usize },
}

impl From<&SkillError> for RobotStatus {
    fn from(err: &SkillError) -> Self {
        let structured = err.to_structured();
        Self::Error {
            code: structured.code,
            numeric_code: structured.numeric_code,
            message: structured.message,
            suggestion: structured.suggestion,
            context: structured.context,
            recoverable: structured.recoverable,
            category: structured.category,
        }
    }
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    robot_with_status(RobotStatus::Ok, data)
}

/// Response for a batch with `failed` failures out of `completed + failed`.
pub fn robot_batch<T: Serialize>(data: T, completed: usize, failed: usize) -> RobotResponse<T> {
    let status = if failed == 0 {
        RobotStatus::Ok
    } else {
        RobotStatus::Partial { completed, failed }
    };
    robot_with_status(status, data)
}

/// Create a robot error response from a [`SkillError`].
pub fn robot_error(err: &SkillError) -> RobotResponse<serde_json::Value> {
    robot_with_status(RobotStatus::from(err), serde_json::Value::Null)
}

fn robot_with_status<T>(status: RobotStatus, data: T) -> RobotResponse<T> {
    RobotResponse {
        status,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key_style = style(format!("{key:width$}", width = self.key_width)).dim();
        self.lines.push(format!("{key_style} {value}"));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

/// Emit `data` in `format`: JSON goes through the response envelope, the
/// other formats through their render functions.
pub fn emit_formatted<T: Serialize>(
    data: T,
    format: OutputFormat,
    human_fn: impl FnOnce(&T) -> HumanLayout,
    plain_fn: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json(&robot_ok(data))?,
        OutputFormat::Human => emit_human(human_fn(&data)),
        OutputFormat::Plain => {
            let text = plain_fn(&data);
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }
    Ok(())
}
