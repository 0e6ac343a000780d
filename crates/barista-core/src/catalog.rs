//! # Catalog Module
//!
//! The fixed menu: every option a customer can pick, and what it does to the
//! price. This is the single source of truth for pricing rules.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          The Catalog                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Base       │   │      Size       │   │      Milk       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  espresso  200  │   │  small   ×1.0   │   │  whole  +30     │       │
//! │  │  americano 250  │   │  medium  ×1.2   │   │  skim   +30     │       │
//! │  │  latte     300  │   │  large   ×1.4   │   │  oat    +60     │       │
//! │  │  cappuccino 320 │   └─────────────────┘   │  soy    +50     │       │
//! │  └─────────────────┘                         │  none   +0      │       │
//! │                                              └─────────────────┘       │
//! │  Flat rates: syrup +40 each (max 4 distinct), ice +20                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Enums Instead of a Price Dictionary?
//! The catalog is immutable by construction: prices live in match arms, so no
//! code path can edit them after an order is built. Unrecognized customer
//! input is rejected at the parse boundary with an error that lists the
//! valid keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OrderError;
use crate::price::Price;

/// Price of one pump of syrup, regardless of flavor.
pub const SYRUP_PRICE: Price = Price::from_rubles(40.0);

/// Flat surcharge for serving any drink iced.
///
/// Applied after the size multiplier: ice costs the same in every cup size.
pub const ICE_PRICE: Price = Price::from_rubles(20.0);

// =============================================================================
// Base
// =============================================================================

/// The drink base - determines the starting price before any modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Espresso,
    Americano,
    Latte,
    Cappuccino,
}

impl Base {
    /// Every recognized base, in menu order.
    pub const ALL: [Base; 4] = [
        Base::Espresso,
        Base::Americano,
        Base::Latte,
        Base::Cappuccino,
    ];

    /// The lowercase business key, as it appears on the menu and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Base::Espresso => "espresso",
            Base::Americano => "americano",
            Base::Latte => "latte",
            Base::Cappuccino => "cappuccino",
        }
    }

    /// Parses a menu key into a base.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::Base;
    ///
    /// assert_eq!(Base::parse("latte").unwrap(), Base::Latte);
    /// assert!(Base::parse("tea").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, OrderError> {
        Self::ALL
            .iter()
            .copied()
            .find(|base| base.as_str() == value)
            .ok_or_else(|| OrderError::invalid_option("base", value, &Self::ALL.map(|b| b.as_str())))
    }

    /// Starting price in rubles, before size multiplier and extras.
    pub const fn price(&self) -> Price {
        match self {
            Base::Espresso => Price::from_rubles(200.0),
            Base::Americano => Price::from_rubles(250.0),
            Base::Latte => Price::from_rubles(300.0),
            Base::Cappuccino => Price::from_rubles(320.0),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Size
// =============================================================================

/// Portion tier - scales the base + extras subtotal multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Every recognized size, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// The lowercase business key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Parses a menu key into a size.
    pub fn parse(value: &str) -> Result<Self, OrderError> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| OrderError::invalid_option("size", value, &Self::ALL.map(|s| s.as_str())))
    }

    /// Multiplier applied to the drink subtotal (ice excluded).
    pub const fn multiplier(&self) -> f64 {
        match self {
            Size::Small => 1.0,
            Size::Medium => 1.2,
            Size::Large => 1.4,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Milk
// =============================================================================

/// Milk choice - a flat surcharge added before the size multiplier.
///
/// `None` is the default: black coffee, no surcharge, and the description
/// stays silent about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Milk {
    Whole,
    Skim,
    Oat,
    Soy,
    None,
}

impl Milk {
    /// Every recognized milk option, including "none".
    pub const ALL: [Milk; 5] = [Milk::Whole, Milk::Skim, Milk::Oat, Milk::Soy, Milk::None];

    /// The lowercase business key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Milk::Whole => "whole",
            Milk::Skim => "skim",
            Milk::Oat => "oat",
            Milk::Soy => "soy",
            Milk::None => "none",
        }
    }

    /// Parses a menu key into a milk choice.
    pub fn parse(value: &str) -> Result<Self, OrderError> {
        Self::ALL
            .iter()
            .copied()
            .find(|milk| milk.as_str() == value)
            .ok_or_else(|| OrderError::invalid_option("milk", value, &Self::ALL.map(|m| m.as_str())))
    }

    /// Surcharge in rubles, added before the size multiplier.
    pub const fn surcharge(&self) -> Price {
        match self {
            Milk::Whole => Price::from_rubles(30.0),
            Milk::Skim => Price::from_rubles(30.0),
            Milk::Oat => Price::from_rubles(60.0),
            Milk::Soy => Price::from_rubles(50.0),
            Milk::None => Price::zero(),
        }
    }
}

/// Default milk is no milk at all.
impl Default for Milk {
    fn default() -> Self {
        Milk::None
    }
}

impl fmt::Display for Milk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
