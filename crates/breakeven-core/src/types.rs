//! # Domain Types
//!
//! Core domain types used throughout the break-even workspace.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │ BreakEvenInputs │──►│ BreakEvenResult  │──►│  ProjectionRow  │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  (table, ±2)    │      │
//! │  │  price          │   │  margin_per_unit │   └─────────────────┘      │
//! │  │  fixed_costs    │   │  break_even_units│   ┌─────────────────┐      │
//! │  │  variable_cost  │   │  break_even_rev. │──►│   ChartSeries   │      │
//! │  └─────────────────┘   └──────────────────┘   │  (points, ±5)   │      │
//! │                                               └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All amounts are full-precision `f64`. Rounding to two decimals is a
//! presentation concern (see [`crate::money`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine;

// =============================================================================
// Inputs
// =============================================================================

/// The three caller-supplied inputs of a break-even calculation.
///
/// Invariants (`price > 0`, `fixed_costs > 0`, `variable_cost_per_unit >= 0`)
/// are enforced by [`crate::validation`], not by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BreakEvenInputs {
    /// Unit sale price.
    pub price: f64,

    /// Total fixed costs for the period.
    pub fixed_costs: f64,

    /// Variable cost per unit.
    pub variable_cost_per_unit: f64,
}

impl BreakEvenInputs {
    /// Creates a new set of inputs.
    pub const fn new(price: f64, fixed_costs: f64, variable_cost_per_unit: f64) -> Self {
        BreakEvenInputs {
            price,
            fixed_costs,
            variable_cost_per_unit,
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// Derived break-even figures. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BreakEvenResult {
    /// `price - variable_cost_per_unit`. May be zero or negative.
    pub margin_per_unit: f64,

    /// Units at which profit is zero. `0.0` when the margin is zero.
    pub break_even_units: f64,

    /// `break_even_units * price`.
    pub break_even_revenue: f64,
}

impl BreakEvenResult {
    /// Classifies the result for presentation.
    pub fn outlook(&self) -> BreakEvenOutlook {
        BreakEvenOutlook::from_margin(self.margin_per_unit)
    }

    /// Projection table around this break-even point.
    ///
    /// ## Example
    /// ```rust
    /// use breakeven_core::{compute_break_even, BreakEvenInputs};
    ///
    /// let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
    /// let result = compute_break_even(10.0, 500.0, 4.0);
    /// assert_eq!(result.projection_table(&inputs).len(), 5);
    /// ```
    pub fn projection_table(&self, inputs: &BreakEvenInputs) -> Vec<ProjectionRow> {
        engine::generate_projection_table(
            inputs.fixed_costs,
            inputs.price,
            inputs.variable_cost_per_unit,
            self.margin_per_unit,
            self.break_even_units,
        )
    }

    /// Chart series (with reference lines) around this break-even point.
    pub fn chart_series(&self, inputs: &BreakEvenInputs) -> ChartSeries {
        ChartSeries {
            points: engine::generate_chart_series(
                self.break_even_units,
                inputs.price,
                inputs.variable_cost_per_unit,
                inputs.fixed_costs,
            ),
            fixed_costs_line: inputs.fixed_costs,
            break_even_line: self.break_even_units,
        }
    }
}

// =============================================================================
// Outlook
// =============================================================================

/// How a front-end should present a [`BreakEvenResult`].
///
/// ```text
/// margin > 0  → Reachable       "break-even at N units"
/// margin == 0 → NoBreakEven     units is the 0.0 sentinel, not a real answer
/// margin < 0  → NegativeMargin  units is negative, each sale deepens the loss
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum BreakEvenOutlook {
    Reachable,
    NoBreakEven,
    NegativeMargin,
}

impl BreakEvenOutlook {
    fn from_margin(margin_per_unit: f64) -> Self {
        if margin_per_unit > 0.0 {
            BreakEvenOutlook::Reachable
        } else if margin_per_unit < 0.0 {
            BreakEvenOutlook::NegativeMargin
        } else {
            // Zero, and NaN from unvalidated input
            BreakEvenOutlook::NoBreakEven
        }
    }
}

// =============================================================================
// Projection Row
// =============================================================================

/// One row of the projection table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProjectionRow {
    pub units: f64,
    pub revenue: f64,
    pub variable_costs: f64,
    pub contribution_margin: f64,
    pub fixed_costs: f64,
    /// `contribution_margin - fixed_costs`
    pub profit_or_loss: f64,
}

// =============================================================================
// Chart
// =============================================================================

/// One point of the revenue/cost chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartPoint {
    pub units: f64,
    pub revenue: f64,
    pub variable_costs: f64,
    /// `variable_costs + fixed_costs`
    pub total_costs: f64,
}

/// Chart points plus the reference lines a renderer draws over them.
///
/// ```text
///   Q │            ╱ revenue
///     │        ╱ ╱── total costs
///     │- - - -╳- - - - - - - - fixed_costs_line
///     │    ╱  ┆ ╱── variable costs
///     │  ╱    ┆
///     └───────┆──────── units
///         break_even_line
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,

    /// Horizontal reference at the fixed costs.
    pub fixed_costs_line: f64,

    /// Vertical reference at the break-even units.
    pub break_even_line: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlook_classification() {
        assert_eq!(BreakEvenOutlook::from_margin(6.0), BreakEvenOutlook::Reachable);
        assert_eq!(BreakEvenOutlook::from_margin(0.0), BreakEvenOutlook::NoBreakEven);
        assert_eq!(BreakEvenOutlook::from_margin(-3.0), BreakEvenOutlook::NegativeMargin);
        assert_eq!(BreakEvenOutlook::from_margin(f64::NAN), BreakEvenOutlook::NoBreakEven);
    }

    #[test]
    fn test_chart_series_reference_lines() {
        let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
        let result = crate::compute_break_even(10.0, 500.0, 4.0);
        let series = result.chart_series(&inputs);

        assert_eq!(series.fixed_costs_line, 500.0);
        assert_eq!(series.break_even_line, result.break_even_units);
        assert_eq!(series.points.len(), 11);
    }

    #[test]
    fn test_serializes_camel_case() {
        let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
        let json = serde_json::to_value(inputs).unwrap();
        assert_eq!(json["variableCostPerUnit"], 4.0);
        assert_eq!(json["fixedCosts"], 500.0);

        let outlook = serde_json::to_value(BreakEvenOutlook::NegativeMargin).unwrap();
        assert_eq!(outlook, "negativeMargin");
    }
}
