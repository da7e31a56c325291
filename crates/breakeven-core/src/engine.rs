//! # Break-Even Engine
//!
//! Pure, stateless break-even formulas and the table/series generators.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  (price, fixed, variable) ── validated by caller                       │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  compute_break_even ──────► BreakEvenResult                            │
//! │                               │                                         │
//! │            ┌──────────────────┴──────────────────┐                      │
//! │            ▼                                     ▼                      │
//! │  generate_projection_table           generate_chart_series             │
//! │  window ±2 units                      window ±5 units                  │
//! │  Vec<ProjectionRow>                   Vec<ChartPoint>                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here re-validates, allocates more than 11 rows, or panics. The
//! latest result is owned by the caller and threaded back in explicitly.

use tracing::{debug, trace};

use crate::types::{BreakEvenResult, ChartPoint, ProjectionRow};
use crate::window::{UnitWindow, CHART_RADIUS, TABLE_RADIUS};

// =============================================================================
// Break-Even Point
// =============================================================================

/// Computes the contribution margin and the break-even point.
///
/// ## Rules
/// - `margin_per_unit = price - variable_cost_per_unit`
/// - margin == 0 → `break_even_units = 0.0` (no break-even point exists;
///   the zero is a sentinel, never NaN or infinity)
/// - otherwise `break_even_units = fixed_costs / margin_per_unit`, negative
///   when the margin is negative
/// - `break_even_revenue = break_even_units * price`
///
/// ## Example
/// ```rust
/// use breakeven_core::compute_break_even;
///
/// let result = compute_break_even(10.0, 500.0, 4.0);
/// assert_eq!(result.margin_per_unit, 6.0);
/// assert!((result.break_even_units - 83.33).abs() < 0.01);
/// assert!((result.break_even_revenue - 833.33).abs() < 0.01);
/// ```
pub fn compute_break_even(
    price: f64,
    fixed_costs: f64,
    variable_cost_per_unit: f64,
) -> BreakEvenResult {
    let margin_per_unit = price - variable_cost_per_unit;

    let break_even_units = if margin_per_unit == 0.0 {
        0.0
    } else {
        fixed_costs / margin_per_unit
    };

    let result = BreakEvenResult {
        margin_per_unit,
        break_even_units,
        break_even_revenue: break_even_units * price,
    };

    debug!(
        margin_per_unit,
        break_even_units,
        break_even_revenue = result.break_even_revenue,
        "break-even computed"
    );

    result
}

// =============================================================================
// Projection Table
// =============================================================================

/// Builds the projection table over `[max(0, be - 2), be + 2]`, one row per
/// unit.
///
/// Always returns at least one row. Values are full precision; formatting
/// to two decimals is left to the renderer.
pub fn generate_projection_table(
    fixed_costs: f64,
    price: f64,
    variable_cost_per_unit: f64,
    margin_per_unit: f64,
    break_even_units: f64,
) -> Vec<ProjectionRow> {
    let window = UnitWindow::around(break_even_units, TABLE_RADIUS);
    trace!(start = window.start(), rows = window.len(), "projection window");

    window
        .iter()
        .map(|units| {
            let contribution_margin = units * margin_per_unit;
            ProjectionRow {
                units,
                revenue: units * price,
                variable_costs: units * variable_cost_per_unit,
                contribution_margin,
                fixed_costs,
                profit_or_loss: contribution_margin - fixed_costs,
            }
        })
        .collect()
}

// =============================================================================
// Chart Series
// =============================================================================

/// Builds the chart points over `[max(0, be - 5), be + 5]`, one per unit.
///
/// Requires a `break_even_units` obtained from [`compute_break_even`]; see
/// [`crate::worksheet::Worksheet::chart_series`] for the checked entry point
/// that reports "compute break-even first".
pub fn generate_chart_series(
    break_even_units: f64,
    price: f64,
    variable_cost_per_unit: f64,
    fixed_costs: f64,
) -> Vec<ChartPoint> {
    let window = UnitWindow::around(break_even_units, CHART_RADIUS);
    trace!(start = window.start(), points = window.len(), "chart window");

    window
        .iter()
        .map(|units| {
            let variable_costs = units * variable_cost_per_unit;
            ChartPoint {
                units,
                revenue: units * price,
                variable_costs,
                total_costs: variable_costs + fixed_costs,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
