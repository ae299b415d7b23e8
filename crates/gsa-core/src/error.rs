//! Error types and exit codes for gsa
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unsupported values)
//! - 3: Data error (unreadable or malformed config)
//!
//! The traversal algorithms themselves never return these errors. An empty
//! stack pop inside a traversal is a broken invariant and panics instead.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the gsa CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the traversal algorithms
#[derive(Error, Debug)]
pub enum GsaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GsaError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GsaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GsaError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GsaError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GsaError::UnknownFormat(_)
            | GsaError::DuplicateFormat
            | GsaError::UsageError(_)
            | GsaError::InvalidValue { .. }
            | GsaError::Unsupported { .. } => ExitCode::Usage,

            GsaError::InvalidConfig { .. } => ExitCode::Data,

            GsaError::Json(_)
            | GsaError::Toml(_)
            | GsaError::FailedOperationWithTarget { .. }
            | GsaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GsaError::UnknownFormat(_) => "unknown_format",
            GsaError::DuplicateFormat => "duplicate_format",
            GsaError::UsageError(_) => "usage_error",
            GsaError::InvalidValue { .. } => "invalid_value",
            GsaError::Unsupported { .. } => "unsupported",
            GsaError::InvalidConfig { .. } => "invalid_config",
            GsaError::Json(_) => "json_error",
            GsaError::Toml(_) => "toml_error",
            GsaError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GsaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gsa operations
pub type Result<T> = std::result::Result<T, GsaError>;
