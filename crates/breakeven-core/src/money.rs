//! # Money Module
//!
//! Display-side money: full-precision engine amounts rounded to cents.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Engine (f64, full precision)                                          │
//! │    break_even_revenue = 833.3333333333334                              │
//! │          │                                                              │
//! │          ▼  Money::from_amount  (round half away from zero)            │
//! │  Money(83333 cents)                                                     │
//! │          │                                                              │
//! │          ▼  format_with("Q")                                           │
//! │  "Q833.33"                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never rounds. Only renderers convert to `Money`.
//!
//! ## Usage
//! ```rust
//! use breakeven_core::money::{format_amount, Money};
//!
//! let revenue = Money::from_amount(833.3333).unwrap();
//! assert_eq!(revenue.cents(), 83333);
//! assert_eq!(revenue.format_with("Q"), "Q833.33");
//!
//! assert_eq!(format_amount(f64::NAN, "Q"), "n/a");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Amounts beyond this many cents cannot be held in an `i64`.
const MAX_CENTS: f64 = 9.0e18;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents, centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: losses and negative break-even revenue are legal
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: the symbol is a front-end setting (no conversion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a full-precision amount to the nearest cent.
    ///
    /// Halves round away from zero. Returns `None` for NaN, infinities and
    /// amounts too large for an `i64` of cents.
    ///
    /// ## Example
    /// ```rust
    /// use breakeven_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(10.006).map(|m| m.cents()), Some(1001));
    /// assert_eq!(Money::from_amount(-166.666).map(|m| m.cents()), Some(-16667));
    /// assert!(Money::from_amount(f64::INFINITY).is_none());
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents.abs() >= MAX_CENTS {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is negative (a loss).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats with a currency symbol: `"Q10.99"`, `"-Q5.50"`.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, self.major().abs(), self.minor())
    }
}

/// Two decimals, no symbol: `"10.99"`, `"-5.50"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Formats a full-precision amount for display, `"n/a"` when it has no
/// finite cent value.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    match Money::from_amount(amount) {
        Some(money) => money.format_with(symbol),
        None => "n/a".to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
