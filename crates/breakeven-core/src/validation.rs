//! # Validation Module
//!
//! Input validation for break-even calculations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (CLI / form)                                       │
//! │  ├── Raw text → number (parse_amount)                                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (validate)                                       │
//! │  ├── price > 0                                                         │
//! │  ├── fixed costs > 0                                                   │
//! │  └── variable cost per unit >= 0                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                       │
//! │  └── Does NOT re-validate, but never panics on bad input               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation must run before EVERY computation and before EVERY chart
//! request. A front-end must not assume a check done for one action carries
//! over to the next one.
//!
//! ## Usage
//! ```rust
//! use breakeven_core::validation::validate;
//!
//! assert!(validate(10.0, 500.0, 4.0).is_ok());
//! assert!(validate(0.0, 500.0, 4.0).is_err());
//! ```

use tracing::debug;

use crate::error::ValidationError;
use crate::types::BreakEvenInputs;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// User-facing field names, shared with front-ends for error display.
pub const FIELD_PRICE: &str = "price";
pub const FIELD_FIXED_COSTS: &str = "fixed costs";
pub const FIELD_VARIABLE_COST: &str = "variable cost per unit";

// =============================================================================
// Input Validators
// =============================================================================

/// Validates the three break-even inputs.
///
/// ## Rules
/// - `price` must be finite and > 0
/// - `fixed_costs` must be finite and > 0
/// - `variable_cost_per_unit` must be finite and >= 0
///
/// Fields are checked in that order; the first failure is returned.
///
/// ## Example
/// ```rust
/// use breakeven_core::validation::validate;
///
/// assert!(validate(10.0, 500.0, 4.0).is_ok());
/// assert!(validate(10.0, 500.0, 0.0).is_ok());  // free to produce
/// assert!(validate(-5.0, 500.0, 4.0).is_err());
/// assert!(validate(10.0, 0.0, 4.0).is_err());
/// assert!(validate(10.0, 500.0, -1.0).is_err());
/// ```
pub fn validate(price: f64, fixed_costs: f64, variable_cost_per_unit: f64) -> ValidationResult<()> {
    let outcome = check_positive(FIELD_PRICE, price)
        .and_then(|_| check_positive(FIELD_FIXED_COSTS, fixed_costs))
        .and_then(|_| check_non_negative(FIELD_VARIABLE_COST, variable_cost_per_unit));

    if let Err(ref err) = outcome {
        debug!(field = err.field(), %err, "break-even inputs rejected");
    }

    outcome
}

/// Validates a [`BreakEvenInputs`] value.
pub fn validate_inputs(inputs: &BreakEvenInputs) -> ValidationResult<()> {
    validate(inputs.price, inputs.fixed_costs, inputs.variable_cost_per_unit)
}

fn check_positive(field: &str, value: f64) -> ValidationResult<()> {
    check_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    check_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn check_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Raw Text Parsing
// =============================================================================

/// Parses a raw amount typed by the user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input is `Required`
/// - Anything `f64` cannot parse is `InvalidFormat`
///
/// Range checks are left to [`validate`].
///
/// ## Example
/// ```rust
/// use breakeven_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("price", " 10.5 ").unwrap(), 10.5);
/// assert!(parse_amount("price", "").is_err());
/// assert!(parse_amount("price", "ten").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    raw.parse::<f64>().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a number", raw),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_reference_inputs() {
        assert!(validate(10.0, 500.0, 4.0).is_ok());
        assert!(validate(10.0, 500.0, 0.0).is_ok());
        // Equal price and cost is valid input; the engine handles it.
        assert!(validate(4.0, 500.0, 4.0).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(
            validate(0.0, 500.0, 4.0),
            Err(ValidationError::MustBePositive {
                field: FIELD_PRICE.to_string()
            })
        );
        assert!(validate(-5.0, 500.0, 4.0).is_err());
    }

    #[test]
    fn test_validate_fixed_costs() {
        assert_eq!(
            validate(10.0, 0.0, 4.0),
            Err(ValidationError::MustBePositive {
                field: FIELD_FIXED_COSTS.to_string()
            })
        );
        assert!(validate(10.0, -100.0, 4.0).is_err());
    }

    #[test]
    fn test_validate_variable_cost() {
        assert_eq!(
            validate(10.0, 500.0, -1.0),
            Err(ValidationError::MustBeNonNegative {
                field: FIELD_VARIABLE_COST.to_string()
            })
        );
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let err = validate(0.0, 0.0, -1.0).unwrap_err();
        assert_eq!(err.field(), FIELD_PRICE);

        let err = validate(1.0, 0.0, -1.0).unwrap_err();
        assert_eq!(err.field(), FIELD_FIXED_COSTS);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(matches!(
            validate(f64::NAN, 500.0, 4.0),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            validate(10.0, f64::INFINITY, 4.0),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            validate(10.0, 500.0, f64::NEG_INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_inputs_wrapper() {
        let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
        assert!(validate_inputs(&inputs).is_ok());
        assert!(validate_inputs(&BreakEvenInputs::default()).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(FIELD_PRICE, "10"), Ok(10.0));
        assert_eq!(parse_amount(FIELD_PRICE, "  -3.5 "), Ok(-3.5));
        assert!(matches!(
            parse_amount(FIELD_PRICE, "   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_amount(FIELD_PRICE, "12,50"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
