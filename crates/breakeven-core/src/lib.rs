//! # breakeven-core: Pure Break-Even Logic
//!
//! This crate is the **heart** of the workspace. It contains all break-even
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Break-Even Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-end (CLI, form, web page)                 │   │
//! │  │   Collect inputs ──► Render table ──► Render chart ──► Reset   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ breakeven-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │ validation │─►│  engine   │─►│  window  │  │ worksheet │  │   │
//! │  │   │  rules     │  │ formulas  │  │  ±2 / ±5 │  │ (caller   │  │   │
//! │  │   └────────────┘  └───────────┘  └──────────┘  │  state)   │  │   │
//! │  │                                                └───────────┘  │   │
//! │  │   NO I/O • NO UI TOOLKIT • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inputs, results, table rows, chart points
//! - [`validation`] - Input rules, run before every action
//! - [`engine`] - Break-even formulas, table and chart generators
//! - [`window`] - Bounded unit ranges around the break-even point
//! - [`worksheet`] - Caller-owned "latest calculation" state
//! - [`money`] - Rounding to cents for display
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = bit-identical output
//! 2. **No I/O**: rendering and persistence belong to front-ends
//! 3. **Full Precision**: the engine never rounds; renderers do
//! 4. **Explicit Errors**: validation and "not computed" are typed errors;
//!    a zero or negative margin is a result, not an error
//!
//! ## Example Usage
//!
//! ```rust
//! use breakeven_core::{compute_break_even, validate, BreakEvenInputs};
//!
//! let inputs = BreakEvenInputs::new(10.0, 500.0, 4.0);
//! validate(inputs.price, inputs.fixed_costs, inputs.variable_cost_per_unit).unwrap();
//!
//! let result = compute_break_even(10.0, 500.0, 4.0);
//! assert_eq!(result.margin_per_unit, 6.0);
//!
//! let table = result.projection_table(&inputs);
//! assert_eq!(table.len(), 5);
//!
//! let chart = result.chart_series(&inputs);
//! assert_eq!(chart.points.len(), 11);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod window;
pub mod worksheet;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{compute_break_even, generate_chart_series, generate_projection_table};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::{validate, validate_inputs};
pub use worksheet::{Calculation, Worksheet};
