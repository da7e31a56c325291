//! # Worksheet
//!
//! Caller-owned state for an interactive front-end: the inputs currently
//! on screen and the most recent calculation, if any.
//!
//! The engine is stateless; this type is where "has break-even been
//! computed yet?" lives, as an `Option<Calculation>` instead of an
//! attribute that may or may not exist.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Worksheet Operations                                 │
//! │                                                                         │
//! │  User Action             Method              State Change               │
//! │  ───────────             ──────              ────────────               │
//! │                                                                         │
//! │  Edit a field ─────────► set_inputs() ─────► inputs = x, calc = None   │
//! │                                                                         │
//! │  Click Calculate ──────► calculate() ──────► validate, calc = Some(..) │
//! │                                                                         │
//! │  Click Chart ──────────► chart_series() ───► validate, read calc       │
//! │                                              (NotComputed if None)     │
//! │                                                                         │
//! │  Click Clear ──────────► reset() ──────────► inputs = 0, calc = None   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::engine::compute_break_even;
use crate::error::{CoreError, CoreResult};
use crate::types::{BreakEvenInputs, BreakEvenResult, ChartSeries, ProjectionRow};
use crate::validation::validate_inputs;

/// A completed calculation, frozen with the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Calculation {
    pub inputs: BreakEvenInputs,
    pub result: BreakEvenResult,
    pub table: Vec<ProjectionRow>,
    #[ts(as = "String")]
    pub calculated_at: DateTime<Utc>,
}

/// Inputs plus the latest calculation.
///
/// ## Invariants
/// - `calculation`, when present, was computed from the current `inputs`
/// - A new calculation fully replaces the previous one
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    inputs: BreakEvenInputs,
    calculation: Option<Calculation>,
}

impl Worksheet {
    /// Creates an empty worksheet (all inputs zero, nothing computed).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &BreakEvenInputs {
        &self.inputs
    }

    /// The latest calculation, if one exists for the current inputs.
    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    /// Replaces the inputs. Any previous calculation is discarded, so a
    /// chart can never mix a stale break-even point with new inputs.
    pub fn set_inputs(&mut self, inputs: BreakEvenInputs) {
        if self.inputs != inputs {
            debug!(?inputs, "worksheet inputs changed");
            self.calculation = None;
        }
        self.inputs = inputs;
    }

    /// Validates the current inputs, computes the break-even point and the
    /// projection table, and stores the result.
    ///
    /// ## Example
    /// ```rust
    /// use breakeven_core::{BreakEvenInputs, Worksheet};
    ///
    /// let mut sheet = Worksheet::new();
    /// sheet.set_inputs(BreakEvenInputs::new(10.0, 500.0, 4.0));
    /// let calc = sheet.calculate().unwrap();
    /// assert_eq!(calc.result.margin_per_unit, 6.0);
    /// assert_eq!(calc.table.len(), 5);
    /// ```
    pub fn calculate(&mut self) -> CoreResult<&Calculation> {
        validate_inputs(&self.inputs)?;

        let inputs = self.inputs;
        let result = compute_break_even(
            inputs.price,
            inputs.fixed_costs,
            inputs.variable_cost_per_unit,
        );
        let table = result.projection_table(&inputs);

        info!(
            break_even_units = result.break_even_units,
            rows = table.len(),
            "worksheet calculated"
        );

        Ok(&*self.calculation.insert(Calculation {
            inputs,
            result,
            table,
            calculated_at: Utc::now(),
        }))
    }

    /// Re-validates the current inputs and builds the chart series from the
    /// latest calculation.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if the inputs are currently invalid
    /// - `CoreError::NotComputed` if nothing has been calculated
    pub fn chart_series(&self) -> CoreResult<ChartSeries> {
        validate_inputs(&self.inputs)?;

        let calculation = self.calculation.as_ref().ok_or(CoreError::NotComputed)?;
        Ok(calculation.result.chart_series(&calculation.inputs))
    }

    /// Clears inputs and the calculation.
    pub fn reset(&mut self) {
        debug!("worksheet reset");
        *self = Self::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn reference_inputs() -> BreakEvenInputs {
        BreakEvenInputs::new(10.0, 500.0, 4.0)
    }

    #[test]
    fn test_chart_before_calculate_is_not_computed() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        assert_eq!(sheet.chart_series(), Err(CoreError::NotComputed));
    }

    #[test]
    fn test_calculate_then_chart() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        sheet.calculate().unwrap();

        let series = sheet.chart_series().unwrap();
        assert_eq!(series.points.len(), 11);
        assert_eq!(series.fixed_costs_line, 500.0);
    }

    #[test]
    fn test_calculate_rejects_invalid_inputs() {
        let mut sheet = Worksheet::new();
        let err = sheet.calculate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(sheet.calculation().is_none());
    }

    #[test]
    fn test_changing_inputs_discards_calculation() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        sheet.calculate().unwrap();

        sheet.set_inputs(BreakEvenInputs::new(12.0, 500.0, 4.0));
        assert!(sheet.calculation().is_none());
        assert_eq!(sheet.chart_series(), Err(CoreError::NotComputed));
    }

    #[test]
    fn test_setting_same_inputs_keeps_calculation() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        sheet.calculate().unwrap();

        sheet.set_inputs(reference_inputs());
        assert!(sheet.calculation().is_some());
    }

    #[test]
    fn test_chart_revalidates_inputs() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        sheet.calculate().unwrap();

        sheet.set_inputs(BreakEvenInputs::new(10.0, 500.0, -1.0));
        assert!(matches!(
            sheet.chart_series(),
            Err(CoreError::Validation(ValidationError::MustBeNonNegative { .. }))
        ));
    }

    #[test]
    fn test_recalculation_supersedes() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        sheet.calculate().unwrap();

        sheet.set_inputs(BreakEvenInputs::new(4.0, 500.0, 4.0));
        let calc = sheet.calculate().unwrap();
        assert_eq!(calc.result.break_even_units, 0.0);
        assert_eq!(calc.inputs.price, 4.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut sheet = Worksheet::new();
        sheet.set_inputs(reference_inputs());
        sheet.calculate().unwrap();

        sheet.reset();
        assert_eq!(*sheet.inputs(), BreakEvenInputs::default());
        assert!(sheet.calculation().is_none());
        assert!(matches!(sheet.chart_series(), Err(CoreError::Validation(_))));
    }
}
