//! # Unit Window
//!
//! The bounded range of unit counts the table and chart are evaluated over.
//!
//! ```text
//!            start = max(0, center - r)          end = center + r
//!                 │                                    │
//!   units ────────●────────●────────●────────●────────●────────►
//!               start   start+1  start+2   ...      ≤ end
//!
//!   unclipped: count = 2r + 1
//!   clipped:   count = floor(end) + 1, at least 1
//! ```
//!
//! Each value is computed as `start + i` rather than by repeated addition,
//! so a window regenerated from the same center is bit-identical.

/// Half-width of the projection table window (±2 units).
pub const TABLE_RADIUS: f64 = 2.0;

/// Half-width of the chart window (±5 units).
pub const CHART_RADIUS: f64 = 5.0;

/// A finite, ascending, unit-stepped range of unit counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitWindow {
    start: f64,
    len: usize,
}

impl UnitWindow {
    /// Builds the window `[max(0, center - radius), center + radius]`.
    ///
    /// Never empty and never longer than `2 * radius + 1`, even when the
    /// center is negative, NaN or infinite.
    ///
    /// ## Example
    /// ```rust
    /// use breakeven_core::window::UnitWindow;
    ///
    /// let window = UnitWindow::around(83.5, 2.0);
    /// let units: Vec<f64> = window.iter().collect();
    /// assert_eq!(units, vec![81.5, 82.5, 83.5, 84.5, 85.5]);
    ///
    /// // Clipped at zero: [0, 3.5] holds 0, 1, 2, 3
    /// assert_eq!(UnitWindow::around(1.5, 2.0).len(), 4);
    /// ```
    pub fn around(center: f64, radius: f64) -> Self {
        if !center.is_finite() {
            return UnitWindow { start: 0.0, len: 1 };
        }

        let max_len = (2.0 * radius).floor().max(0.0) as usize + 1;
        let lower = center - radius;

        // Unclipped: the exact span is 2r, whatever `(c + r) - (c - r)`
        // rounds to.
        if lower >= 0.0 {
            return UnitWindow {
                start: lower,
                len: max_len,
            };
        }

        // Clipped at zero: units are whole numbers, so none exceeds `end`.
        let end = center + radius;
        let len = if end >= 0.0 {
            (end.floor() as usize + 1).min(max_len)
        } else {
            1
        };

        UnitWindow { start: 0.0, len }
    }

    /// First unit count in the window.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Number of unit counts in the window (always >= 1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates the unit counts in ascending order. Restartable.
    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone {
        let start = self.start;
        (0..self.len).map(move |i| start + i as f64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_window_reference_scenario() {
        let center = 500.0 / 6.0;

        let table = UnitWindow::around(center, TABLE_RADIUS);
        assert_eq!(table.len(), 5);
        assert!((table.start() - 81.333_333).abs() < 1e-5);

        let chart = UnitWindow::around(center, CHART_RADIUS);
        assert_eq!(chart.len(), 11);
        assert!((chart.start() - 78.333_333).abs() < 1e-5);
        let last = chart.iter().last().unwrap();
        assert!((last - 88.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_window_clipped_at_zero() {
        let window = UnitWindow::around(0.0, TABLE_RADIUS);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);

        let window = UnitWindow::around(1.5, CHART_RADIUS);
        assert_eq!(window.start(), 0.0);
        assert_eq!(window.len(), 7); // 0..=6, end is 6.5
    }

    #[test]
    fn test_window_clipped_just_below_whole_end() {
        // end = 3.9999999995, so 4 is outside the window
        let window = UnitWindow::around(1.999_999_999_5, TABLE_RADIUS);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_window_negative_center_yields_single_row() {
        let window = UnitWindow::around(-100.0 / 3.0, TABLE_RADIUS);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn test_window_non_finite_center() {
        for center in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let window = UnitWindow::around(center, CHART_RADIUS);
            assert_eq!(window.len(), 1);
            assert_eq!(window.start(), 0.0);
        }
    }

    #[test]
    fn test_window_is_restartable() {
        let window = UnitWindow::around(42.25, CHART_RADIUS);
        let iter = window.iter();
        let first: Vec<f64> = iter.clone().collect();
        let second: Vec<f64> = iter.collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_window_bounded_and_ascending(center in -1.0e6f64..1.0e6, radius in prop::sample::select(vec![TABLE_RADIUS, CHART_RADIUS])) {
            let window = UnitWindow::around(center, radius);
            let units: Vec<f64> = window.iter().collect();

            prop_assert!(!units.is_empty());
            prop_assert!(units.len() <= (2.0 * radius) as usize + 1);
            prop_assert!(units[0] >= 0.0);
            for pair in units.windows(2) {
                prop_assert!((pair[1] - pair[0] - 1.0).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_clipped_window_stays_inside_end(center in -2.0f64..2.0, radius in prop::sample::select(vec![TABLE_RADIUS, CHART_RADIUS])) {
            let window = UnitWindow::around(center, radius);
            for unit in window.iter() {
                prop_assert!(unit <= center + radius);
            }
            prop_assert_eq!(window.len(), (center + radius).floor() as usize + 1);
        }

        #[test]
        fn prop_window_full_width_away_from_zero(center in 10.0f64..1.0e6) {
            let window = UnitWindow::around(center, TABLE_RADIUS);
            prop_assert_eq!(window.len(), 5);
        }
    }
}
