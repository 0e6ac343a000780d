//! # Price Module
//!
//! Provides the `Price` type for ruble amounts.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICING IS DEFINED ON FRACTIONAL MULTIPLIERS                           │
//! │                                                                         │
//! │  A medium drink costs ×1.2 of its subtotal, a large ×1.4:              │
//! │    (230 whole-milk espresso) × 1.2 = 276.00 RUB                        │
//! │                                                                         │
//! │  The business rule is: compute exactly, round ONLY at display time.    │
//! │  Every catalog amount is a whole number of rubles and every multiplier │
//! │  has one decimal digit, so totals stay well within f64 exactness for   │
//! │  the two decimals we ever show.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barista_core::Price;
//!
//! let base = Price::from_rubles(300.0);
//! let with_milk = base + Price::from_rubles(60.0);
//! let medium = with_milk * 1.2;
//!
//! assert_eq!(medium.rubles(), 432.0);
//! assert_eq!(medium.to_string(), "432.00 RUB");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Price Type
// =============================================================================

/// A ruble amount.
///
/// ## Design Decisions
/// - **f64**: pricing rules use fractional size multipliers and are computed
///   without intermediate rounding; only [`fmt::Display`] rounds (2 decimals)
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **No `Eq`/`Ord`**: floats only give partial comparisons, and that is all
///   the domain needs
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a ruble amount.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::Price;
    ///
    /// let price = Price::from_rubles(250.0);
    /// assert_eq!(price.rubles(), 250.0);
    /// ```
    #[inline]
    pub const fn from_rubles(rubles: f64) -> Self {
        Price(rubles)
    }

    /// Returns the amount in rubles, unrounded.
    #[inline]
    pub const fn rubles(&self) -> f64 {
        self.0
    }

    /// Returns zero rubles.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the amount is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to exactly two decimals and appends the currency code.
///
/// This is the only place rounding happens; arithmetic is exact f64.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} RUB", self.0)
    }
}

/// Default price is zero.
impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

/// Addition of two Price values.
impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Scaling by a size multiplier.
impl Mul<f64> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Price(self.0 * factor)
    }
}

/// Multiplication by a count (for per-unit rates like syrup pumps).
impl Mul<usize> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, count: usize) -> Self {
        Price(self.0 * count as f64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
