//! # Error Types
//!
//! Domain-specific error types for breakeven-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  breakeven-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  │   └── NotComputed  - Chart requested before any calculation         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the user sees (text or JSON)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! A zero contribution margin is a defined outcome (break-even units = 0),
//! and a negative margin yields a negative break-even point. Both are
//! reported through [`crate::types::BreakEvenOutlook`], never through `Err`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is locally recoverable: the caller shows the message and
/// waits for corrected input. Nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A chart series was requested before any successful calculation.
    ///
    /// ## User Workflow
    /// ```text
    /// Open worksheet
    ///      │
    ///      ▼
    /// Click "Chart" (no calculation yet)
    ///      │
    ///      ▼
    /// NotComputed
    ///      │
    ///      ▼
    /// UI shows: "compute break-even first"
    /// ```
    #[error("compute break-even first")]
    NotComputed,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any computation runs. The `field` is the user-facing name
/// of the offending input (e.g. "price", "fixed costs").
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Raw text could not be parsed as a number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the input that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
