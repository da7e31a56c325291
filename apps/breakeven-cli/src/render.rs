//! # Text Rendering
//!
//! Turns engine output into aligned terminal text. This is the only place
//! amounts are rounded to two decimals.
//!
//! ```text
//!   Units   Revenue  Variable Costs  Contribution Margin  Fixed Costs  Profit/Loss
//!   81.33   Q813.33         Q325.33              Q488.00      Q500.00     -Q12.00
//!   ...
//! ```

use breakeven_core::money::format_amount;
use breakeven_core::{BreakEvenOutlook, BreakEvenResult, ChartSeries, ProjectionRow};

const TABLE_HEADERS: [&str; 6] = [
    "Units",
    "Revenue",
    "Variable Costs",
    "Contribution Margin",
    "Fixed Costs",
    "Profit/Loss",
];

const CHART_HEADERS: [&str; 4] = ["Units", "Revenue", "Variable Costs", "Total Costs"];

/// Formats a unit count to two decimals.
pub fn format_units(units: f64) -> String {
    if units.is_finite() {
        format!("{:.2}", units)
    } else {
        "n/a".to_string()
    }
}

/// The three headline figures plus an outlook note when the break-even
/// point is not a real unit count.
pub fn summary(result: &BreakEvenResult, symbol: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Contribution margin per unit: {}\n",
        format_amount(result.margin_per_unit, symbol)
    ));
    out.push_str(&format!(
        "Break-even point (units):     {}\n",
        format_units(result.break_even_units)
    ));
    out.push_str(&format!(
        "Break-even point (revenue):   {}\n",
        format_amount(result.break_even_revenue, symbol)
    ));

    if let Some(note) = outlook_note(result.outlook()) {
        out.push_str(note);
        out.push('\n');
    }

    out
}

/// Message explaining a degenerate break-even point, if any.
pub fn outlook_note(outlook: BreakEvenOutlook) -> Option<&'static str> {
    match outlook {
        BreakEvenOutlook::Reachable => None,
        BreakEvenOutlook::NoBreakEven => Some(
            "No break-even point exists: each unit contributes zero margin, so fixed costs are never recovered.",
        ),
        BreakEvenOutlook::NegativeMargin => Some(
            "Warning: variable cost exceeds price. Every unit sold increases the loss; the break-even point is negative.",
        ),
    }
}

/// Renders the projection table.
pub fn projection_table(rows: &[ProjectionRow], symbol: &str) -> String {
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                format_units(row.units),
                format_amount(row.revenue, symbol),
                format_amount(row.variable_costs, symbol),
                format_amount(row.contribution_margin, symbol),
                format_amount(row.fixed_costs, symbol),
                format_amount(row.profit_or_loss, symbol),
            ]
        })
        .collect::<Vec<_>>();

    grid(&TABLE_HEADERS, &cells)
}

/// Renders the chart series as a table followed by its reference lines.
pub fn chart_series(series: &ChartSeries, symbol: &str) -> String {
    let cells = series
        .points
        .iter()
        .map(|point| {
            vec![
                format_units(point.units),
                format_amount(point.revenue, symbol),
                format_amount(point.variable_costs, symbol),
                format_amount(point.total_costs, symbol),
            ]
        })
        .collect::<Vec<_>>();

    let mut out = grid(&CHART_HEADERS, &cells);
    out.push_str(&format!(
        "Fixed costs reference: {}\n",
        format_amount(series.fixed_costs_line, symbol)
    ));
    out.push_str(&format!(
        "Break-even reference:  {} units\n",
        format_units(series.break_even_line)
    ));
    out
}

/// Right-aligns every column to its widest cell.
fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = grid_line(headers.iter().copied(), &widths);
    for row in rows {
        out.push_str(&grid_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn grid_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>();
    format!("{}\n", padded.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven_core::{compute_break_even, BreakEvenInputs};

    #[test]
    fn test_summary_reference_scenario() {
        let result = compute_break_even(10.0, 500.0, 4.0);
        let text = summary(&result, "Q");
        assert!(text.contains("Contribution margin per unit: Q6.00"));
        assert!(text.contains("Break-even point (units):     83.33"));
        assert!(text.contains("Break-even point (revenue):   Q833.33"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_summary_zero_margin_note() {
        let result = compute_break_even(4.0, 500.0, 4.0);
        assert!(summary(&result, "Q").contains("No break-even point exists"));
    }

    #[test]
    fn test_summary_negative_margin_note() {
        let result = compute_break_even(5.0, 100.0, 8.0);
        let text = summary(&result, "$");
        assert!(text.contains("-33.33"));
        assert!(text.contains("-$166.67"));
        assert!(text.contains("Warning: variable cost exceeds price"));
    }

    #[test]
    fn test_projection_table_layout() {
        let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
        let rows = compute_break_even(10.0, 500.0, 4.0).projection_table(&inputs);
        let text = projection_table(&rows, "Q");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Contribution Margin"));
        assert!(lines[1].starts_with("81.33"));
        assert!(lines[1].ends_with("-Q12.00"));

        // All lines share one width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_chart_series_reference_lines() {
        let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
        let series = compute_break_even(10.0, 500.0, 4.0).chart_series(&inputs);
        let text = chart_series(&series, "Q");

        assert_eq!(text.lines().count(), 1 + 11 + 2);
        assert!(text.contains("Fixed costs reference: Q500.00"));
        assert!(text.contains("Break-even reference:  83.33 units"));
    }

    #[test]
    fn test_format_units_non_finite() {
        assert_eq!(format_units(f64::NAN), "n/a");
        assert_eq!(format_units(-33.333), "-33.33");
    }
}
