//! # CLI Error Type
//!
//! Unified error type for every command.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Command Function ── Result<(), CliError>                              │
//! │         │                                                               │
//! │         ├── ValidationError ── CoreError::Validation ──┐               │
//! │         ├── CoreError::NotComputed ────────────────────┤               │
//! │         ├── ConfigError ───────────────────────────────┼──► CliError   │
//! │         └── io::Error / serde_json::Error ─────────────┘       │       │
//! │                                                                 ▼       │
//! │                    text: "error: price must be greater than zero"      │
//! │                    json: {"code":"VALIDATION_ERROR","message":"..."}   │
//! │                    exit code: 2 for validation, 1 otherwise            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::process::ExitCode;

use breakeven_core::CoreError;
use serde::Serialize;

use crate::config::ConfigError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price must be greater than zero"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Chart requested before a calculation
    NotComputed,

    /// Configuration could not be loaded
    ConfigError,

    /// I/O or serialization failure
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self.code {
            ErrorCode::ValidationError => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Converts core errors. Validation messages are shown without the
/// "Validation error:" prefix the core adds.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(inner) => {
                CliError::new(ErrorCode::ValidationError, inner.to_string())
            }
            CoreError::NotComputed => CliError::new(ErrorCode::NotComputed, err.to_string()),
        }
    }
}

impl From<breakeven_core::ValidationError> for CliError {
    fn from(err: breakeven_core::ValidationError) -> Self {
        CliError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::internal(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(format!("Serialization error: {}", err))
    }
}
