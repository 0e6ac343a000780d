//! # Order Module
//!
//! The immutable, finalized coffee order.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order = Frozen Snapshot                              │
//! │                                                                         │
//! │  OrderBuilder (mutable) ──build()──► Order (immutable)                 │
//! │                                        │                                │
//! │                                        ├── selections (frozen)         │
//! │                                        ├── price (computed ONCE)       │
//! │                                        ├── description (computed ONCE) │
//! │                                        ├── id (UUID v4)                │
//! │                                        └── created_at (UTC)            │
//! │                                                                         │
//! │  Mutating the builder afterwards never touches an existing Order:     │
//! │  price and description are pure functions of the selections and the   │
//! │  catalog, evaluated at construction time and never again.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::catalog::{Base, Milk, Size, ICE_PRICE, SYRUP_PRICE};
use crate::price::Price;

// =============================================================================
// Order
// =============================================================================

/// A finalized, validated coffee order.
///
/// Created only via [`crate::OrderBuilder::build`]; has no mutating methods.
/// Fields are private and exposed through read-only accessors so the frozen
/// price/description can never drift from the selections they were derived
/// from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4), assigned at build time.
    id: String,

    /// The drink base.
    base: Base,

    /// Portion size.
    size: Size,

    /// Milk choice ("none" when absent).
    milk: Milk,

    /// Distinct syrup flavors, in the order they were added.
    syrups: Vec<String>,

    /// Teaspoons of sugar (free, but capped).
    sugar: u8,

    /// Whether the drink is served iced.
    iced: bool,

    /// Price at build time (frozen).
    price: Price,

    /// Human-readable summary at build time (frozen).
    description: String,

    /// When the order was finalized.
    created_at: DateTime<Utc>,
}

impl Order {
    /// Freezes the builder's selections into an order.
    ///
    /// `syrups` must already be deduplicated and within the limit - the
    /// builder guarantees both before calling.
    pub(crate) fn new(
        base: Base,
        size: Size,
        milk: Milk,
        syrups: Vec<String>,
        sugar: u8,
        iced: bool,
    ) -> Self {
        let price = compute_price(base, size, milk, syrups.len(), iced);
        let description = compute_description(base, size, milk, &syrups, sugar, iced);

        Order {
            id: Uuid::new_v4().to_string(),
            base,
            size,
            milk,
            syrups,
            sugar,
            iced,
            price,
            description,
            created_at: Utc::now(),
        }
    }

    /// Unique order identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The drink base.
    #[inline]
    pub fn base(&self) -> Base {
        self.base
    }

    /// Portion size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Milk choice.
    #[inline]
    pub fn milk(&self) -> Milk {
        self.milk
    }

    /// Distinct syrup flavors, in insertion order.
    #[inline]
    pub fn syrups(&self) -> &[String] {
        &self.syrups
    }

    /// Teaspoons of sugar.
    #[inline]
    pub fn sugar(&self) -> u8 {
        self.sugar
    }

    /// Whether the drink is served iced.
    #[inline]
    pub fn iced(&self) -> bool {
        self.iced
    }

    /// The frozen price.
    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// The frozen description. Empty when there is nothing extra to say
    /// (plain base + size with every extra at its default).
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the order was finalized.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Receipt-line rendering.
///
/// A plain drink has an empty description, so the line falls back to the
/// price; a customized drink shows its description instead.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.price)
        } else {
            f.write_str(&self.description)
        }
    }
}

// =============================================================================
// Pure Pricing / Description Functions
// =============================================================================

/// Computes the order price from the catalog.
///
/// ## Formula
/// ```text
/// total = (base + milk + 40 × |syrups|) × size_multiplier
/// total += 20 if iced
/// ```
/// Sugar never affects price. Ice is added after the multiplier: a large
/// iced drink pays the same 20 RUB for ice as a small one.
fn compute_price(base: Base, size: Size, milk: Milk, syrup_count: usize, iced: bool) -> Price {
    let mut total = (base.price() + milk.surcharge() + SYRUP_PRICE * syrup_count) * size.multiplier();
    if iced {
        total += ICE_PRICE;
    }
    total
}

/// Builds the human-readable summary from non-default selections only.
///
/// Returns the empty string when every extra sits at its default - "nothing
/// extra to say" - which is distinct from an order costing nothing.
fn compute_description(
    base: Base,
    size: Size,
    milk: Milk,
    syrups: &[String],
    sugar: u8,
    iced: bool,
) -> String {
    let mut extra_parts: Vec<String> = Vec::new();

    if milk != Milk::None {
        extra_parts.push(format!("with {milk} milk"));
    }
    if !syrups.is_empty() {
        extra_parts.push(format!("+{}", syrups.join(", ")));
    }
    if iced {
        extra_parts.push("(iced)".to_string());
    }
    if sugar > 0 {
        extra_parts.push(format!("{sugar} tsp sugar"));
    }

    if extra_parts.is_empty() {
        String::new()
    } else {
        format!("{size} {base} {}", extra_parts.join(" "))
            .trim_end()
            .to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
