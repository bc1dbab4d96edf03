//! Error types for precedent.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=index, 4=validation, 5=conflict, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for precedent operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Index location (exit 2)
    NotInitialized,
    AlreadyInitialized,

    // Validation (exit 4)
    InvalidArgument,
    InvalidTimestamp,

    // Conflict (exit 5)
    DuplicateIssue,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidTimestamp => "INVALID_TIMESTAMP",
            Self::DuplicateIssue => "DUPLICATE_ISSUE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::NotInitialized | Self::AlreadyInitialized => 2,
            Self::InvalidArgument | Self::InvalidTimestamp => 4,
            Self::DuplicateIssue => 5,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether the caller should retry with corrected input.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::InvalidTimestamp | Self::DuplicateIssue
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in precedent operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No index location could be determined")]
    NotInitialized,

    #[error("Already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("Issue #{number} is already indexed")]
    DuplicateIssue { number: u64 },

    #[error("Invalid timestamp '{value}': expected ISO 8601 / RFC 3339")]
    InvalidTimestamp { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::AlreadyInitialized { .. } => ErrorCode::AlreadyInitialized,
            Self::DuplicateIssue { .. } => ErrorCode::DuplicateIssue,
            Self::InvalidTimestamp { .. } => ErrorCode::InvalidTimestamp,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => Some(
                "Run `precedent init` in your project, `precedent init --global`, \
                 or pass --index <path>"
                    .to_string(),
            ),

            Self::AlreadyInitialized { path } => Some(format!(
                "An index already exists at {}. Use `--force` to replace it with an empty one.",
                path.display()
            )),

            Self::DuplicateIssue { number } => Some(format!(
                "Indexed issues are append-only. Issue #{number} cannot be added twice."
            )),

            Self::InvalidTimestamp { .. } => {
                Some("Example: --resolved-at 2025-01-20T10:00:00Z".to_string())
            }

            Self::InvalidArgument(msg) => {
                if msg.contains("min-score") {
                    Some("Similarity thresholds range from 0.0 to 1.0".to_string())
                } else if msg.contains("label") {
                    Some("Labels are short, non-empty strings: --labels bug api".to_string())
                } else {
                    None
                }
            }

            Self::Io(_) | Self::Json(_) | Self::Config(_) | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
