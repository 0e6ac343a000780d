//! # Builder Module
//!
//! The fluent, validating accumulator for coffee orders.
//!
//! ## Builder Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    OrderBuilder Operations                              │
//! │                                                                         │
//! │  Counter Action            Builder Call            State Change        │
//! │  ──────────────            ────────────            ────────────        │
//! │                                                                         │
//! │  Pick drink ─────────────► set_base("latte") ────► base = Latte        │
//! │                                                                         │
//! │  Pick cup ───────────────► set_size("medium") ───► size = Medium       │
//! │                                                                         │
//! │  Add syrup ──────────────► add_syrup("vanilla") ─► syrups.push(..)     │
//! │                            (dedup, max 4 distinct)                      │
//! │                                                                         │
//! │  "Make it iced" ─────────► set_iced(true) ───────► iced = true         │
//! │                                                                         │
//! │  "Actually, plain" ──────► clear_extras() ───────► extras → defaults   │
//! │                            (base and size survive)                      │
//! │                                                                         │
//! │  Ring it up ─────────────► build() ──────────────► Order snapshot      │
//! │                            (builder stays usable for the next round)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validating setter checks its rule BEFORE mutating, so a rejected
//! call leaves the builder exactly as it was.

use serde::{Deserialize, Serialize};

use crate::catalog::{Base, Milk, Size};
use crate::error::{OrderError, OrderResult};
use crate::order::Order;
use crate::{MAX_SUGAR_TSP, MAX_SYRUPS};

// =============================================================================
// OrderBuilder
// =============================================================================

/// Accumulates coffee order selections with per-step validation.
///
/// ## Invariants
/// - `syrups` holds distinct names in insertion order, never more than
///   [`MAX_SYRUPS`]
/// - `sugar` stays within `0..=`[`MAX_SUGAR_TSP`]
/// - `build` refuses to run until both base and size are chosen
///
/// ## Reuse
/// `build` borrows the builder and snapshots it; it neither consumes nor
/// resets anything. Keep chaining and build again to ring up a variation:
/// each [`Order`] is an independent value.
///
/// ## Thread Safety
/// A plain mutable value. Share it across threads only behind external
/// synchronization (e.g. a `Mutex`); the builder itself takes no locks.
///
/// ## Example
/// ```rust
/// use barista_core::OrderBuilder;
///
/// let mut builder = OrderBuilder::new();
/// builder
///     .set_base("cappuccino").unwrap()
///     .set_size("large").unwrap()
///     .add_syrup("caramel").unwrap();
///
/// let order = builder.build().unwrap();
/// assert!(order.price().is_positive());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBuilder {
    /// Chosen drink base; `build` fails while unset.
    base: Option<Base>,

    /// Chosen portion size; `build` fails while unset.
    size: Option<Size>,

    /// Milk choice, defaults to none.
    milk: Milk,

    /// Distinct syrup names in insertion order (the deterministic order the
    /// description will use).
    syrups: Vec<String>,

    /// Teaspoons of sugar.
    sugar: u8,

    /// Served iced?
    iced: bool,
}

impl OrderBuilder {
    /// Creates a builder with nothing chosen and every extra at its default.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Validating setters (return Result for `?`-chaining)
    // -------------------------------------------------------------------------

    /// Sets the drink base.
    ///
    /// Fails with [`OrderError::InvalidOption`] - listing the valid keys -
    /// when `base` is not on the menu.
    pub fn set_base(&mut self, base: &str) -> OrderResult<&mut Self> {
        self.base = Some(Base::parse(base)?);
        Ok(self)
    }

    /// Sets the portion size.
    ///
    /// Fails with [`OrderError::InvalidOption`] when `size` is not on the menu.
    pub fn set_size(&mut self, size: &str) -> OrderResult<&mut Self> {
        self.size = Some(Size::parse(size)?);
        Ok(self)
    }

    /// Sets the milk choice.
    ///
    /// Fails with [`OrderError::InvalidOption`] when `milk` is not on the menu.
    pub fn set_milk(&mut self, milk: &str) -> OrderResult<&mut Self> {
        self.milk = Milk::parse(milk)?;
        Ok(self)
    }

    /// Adds a syrup flavor.
    ///
    /// ## Behavior
    /// - A name already present is silently absorbed (set semantics): no
    ///   error, no state change - even when the builder already holds the
    ///   maximum number of distinct syrups
    /// - A new name is accepted only while the distinct count is below
    ///   [`MAX_SYRUPS`]; otherwise fails with [`OrderError::LimitExceeded`]
    pub fn add_syrup(&mut self, name: &str) -> OrderResult<&mut Self> {
        if self.syrups.iter().any(|syrup| syrup == name) {
            return Ok(self);
        }

        if self.syrups.len() >= MAX_SYRUPS {
            return Err(OrderError::LimitExceeded {
                field: "syrups".to_string(),
                max: MAX_SYRUPS,
            });
        }

        self.syrups.push(name.to_string());
        Ok(self)
    }

    /// Sets the sugar count in teaspoons.
    ///
    /// Fails with [`OrderError::OutOfRange`] outside `0..=`[`MAX_SUGAR_TSP`].
    pub fn set_sugar(&mut self, teaspoons: i64) -> OrderResult<&mut Self> {
        if !(0..=MAX_SUGAR_TSP).contains(&teaspoons) {
            return Err(OrderError::OutOfRange {
                field: "sugar".to_string(),
                min: 0,
                max: MAX_SUGAR_TSP,
            });
        }

        self.sugar = teaspoons as u8;
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Infallible setters (return the builder directly)
    // -------------------------------------------------------------------------

    /// Sets whether the drink is served iced. Never fails.
    pub fn set_iced(&mut self, iced: bool) -> &mut Self {
        self.iced = iced;
        self
    }

    /// Resets milk, syrups, sugar and iced to their defaults, leaving base
    /// and size untouched. Never fails.
    pub fn clear_extras(&mut self) -> &mut Self {
        self.milk = Milk::None;
        self.syrups.clear();
        self.sugar = 0;
        self.iced = false;
        self
    }

    // -------------------------------------------------------------------------
    // Build
    // -------------------------------------------------------------------------

    /// Freezes the current selections into an immutable [`Order`].
    ///
    /// Fails with [`OrderError::MissingField`] unless both base and size have
    /// been set. The builder is left untouched and stays usable.
    pub fn build(&self) -> OrderResult<Order> {
        let base = self.base.ok_or_else(|| OrderError::MissingField {
            field: "base".to_string(),
        })?;
        let size = self.size.ok_or_else(|| OrderError::MissingField {
            field: "size".to_string(),
        })?;

        Ok(Order::new(
            base,
            size,
            self.milk,
            self.syrups.clone(),
            self.sugar,
            self.iced,
        ))
    }

    // -------------------------------------------------------------------------
    // Read accessors (for front-of-house rendering of the in-progress order)
    // -------------------------------------------------------------------------

    /// The chosen base, if any.
    #[inline]
    pub fn base(&self) -> Option<Base> {
        self.base
    }

    /// The chosen size, if any.
    #[inline]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Current milk choice.
    #[inline]
    pub fn milk(&self) -> Milk {
        self.milk
    }

    /// Distinct syrups staged so far, in insertion order.
    #[inline]
    pub fn syrups(&self) -> &[String] {
        &self.syrups
    }

    /// Number of distinct syrups staged so far.
    #[inline]
    pub fn syrup_count(&self) -> usize {
        self.syrups.len()
    }

    /// Current sugar count in teaspoons.
    #[inline]
    pub fn sugar(&self) -> u8 {
        self.sugar
    }

    /// Whether the drink is currently staged as iced.
    #[inline]
    pub fn iced(&self) -> bool {
        self.iced
    }

    /// Checks whether any extra deviates from its default.
    pub fn has_extras(&self) -> bool {
        self.milk != Milk::None || !self.syrups.is_empty() || self.sugar > 0 || self.iced
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A builder with the required fields already chosen.
    fn latte_small() -> OrderBuilder {
        let mut builder = OrderBuilder::new();
        builder.set_base("latte").unwrap().set_size("small").unwrap();
        builder
    }

    #[test]
    fn test_fluent_chain_builds_order() {
        let order = OrderBuilder::new()
            .set_base("latte")
            .unwrap()
            .set_size("medium")
            .unwrap()
            .set_milk("oat")
            .unwrap()
            .add_syrup("vanilla")
            .unwrap()
            .set_sugar(2)
            .unwrap()
            .set_iced(true)
            .build()
            .unwrap();

        assert_eq!(order.base(), Base::Latte);
        assert_eq!(order.size(), Size::Medium);
        assert_eq!(order.milk(), Milk::Oat);
        assert_eq!(order.syrups(), ["vanilla".to_string()]);
        assert_eq!(order.sugar(), 2);
        assert!(order.iced());
        // (300 + 60 + 40) × 1.2 + 20
        assert_eq!(order.price().rubles(), 500.0);
    }

    #[test]
    fn test_invalid_base_lists_valid_keys() {
        let mut builder = OrderBuilder::new();
        let err = builder.set_base("tea").unwrap_err();

        assert!(matches!(err, OrderError::InvalidOption { .. }));
        let message = err.to_string();
        for key in ["espresso", "americano", "latte", "cappuccino"] {
            assert!(message.contains(key), "message should list '{key}'");
        }
        // The failed call left the field unset
        assert_eq!(builder.base(), None);
    }

    #[test]
    fn test_invalid_size_and_milk_rejected() {
        let mut builder = OrderBuilder::new();
        assert!(matches!(
            builder.set_size("venti"),
            Err(OrderError::InvalidOption { .. })
        ));
        assert!(matches!(
            builder.set_milk("almond"),
            Err(OrderError::InvalidOption { .. })
        ));
        assert_eq!(builder.size(), None);
        assert_eq!(builder.milk(), Milk::None);
    }

    #[test]
    fn test_duplicate_syrup_is_absorbed() {
        let mut builder = latte_small();
        builder.add_syrup("vanilla").unwrap();
        builder.add_syrup("vanilla").unwrap();

        assert_eq!(builder.syrup_count(), 1);
        assert_eq!(builder.build().unwrap().syrups(), ["vanilla".to_string()]);
    }

    #[test]
    fn test_fifth_distinct_syrup_fails() {
        let mut builder = latte_small();
        for name in ["vanilla", "caramel", "hazelnut", "mint"] {
            builder.add_syrup(name).unwrap();
        }

        let err = builder.add_syrup("pumpkin").unwrap_err();
        assert_eq!(
            err,
            OrderError::LimitExceeded {
                field: "syrups".to_string(),
                max: MAX_SYRUPS,
            }
        );
        // The rejected name was not inserted
        assert_eq!(builder.syrup_count(), 4);
    }

    #[test]
    fn test_readding_known_syrup_at_limit_succeeds() {
        let mut builder = latte_small();
        for name in ["vanilla", "caramel", "hazelnut", "mint"] {
            builder.add_syrup(name).unwrap();
        }

        // Already present, already at the limit: still a quiet no-op
        builder.add_syrup("caramel").unwrap();
        assert_eq!(builder.syrup_count(), 4);
    }

    #[test]
    fn test_sugar_bounds() {
        let mut builder = latte_small();

        builder.set_sugar(0).unwrap();
        assert_eq!(builder.sugar(), 0);
        builder.set_sugar(5).unwrap();
        assert_eq!(builder.sugar(), 5);

        assert!(matches!(
            builder.set_sugar(6),
            Err(OrderError::OutOfRange { .. })
        ));
        assert!(matches!(
            builder.set_sugar(-1),
            Err(OrderError::OutOfRange { .. })
        ));
        // Last accepted value survives the rejected calls
        assert_eq!(builder.sugar(), 5);
    }

    #[test]
    fn test_build_requires_base() {
        let mut builder = OrderBuilder::new();
        builder.set_size("small").unwrap();

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            OrderError::MissingField {
                field: "base".to_string(),
            }
        );
    }

    #[test]
    fn test_build_requires_size() {
        let mut builder = OrderBuilder::new();
        builder.set_base("espresso").unwrap();

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            OrderError::MissingField {
                field: "size".to_string(),
            }
        );
    }

    #[test]
    fn test_iced_strictly_increases_price() {
        let mut builder = latte_small();
        let still = builder.build().unwrap();
        let iced = builder.set_iced(true).build().unwrap();

        assert!(iced.price() > still.price());
        assert_eq!(iced.price().rubles() - still.price().rubles(), 20.0);
    }

    #[test]
    fn test_builder_reuse_yields_independent_orders() {
        let mut builder = OrderBuilder::new();
        builder
            .set_base("latte")
            .unwrap()
            .set_size("medium")
            .unwrap()
            .set_milk("oat")
            .unwrap()
            .add_syrup("vanilla")
            .unwrap()
            .set_iced(true);

        let first = builder.build().unwrap();

        // Keep mutating the same builder and ring up a variation
        builder
            .set_milk("soy")
            .unwrap()
            .add_syrup("caramel")
            .unwrap()
            .set_iced(false);
        let second = builder.build().unwrap();

        // The first snapshot is untouched by later mutations
        assert_eq!(first.milk(), Milk::Oat);
        assert_eq!(first.syrups(), ["vanilla".to_string()]);
        assert!(first.iced());
        assert_eq!(first.price().rubles(), 500.0);

        assert_eq!(second.milk(), Milk::Soy);
        assert_eq!(
            second.syrups(),
            ["vanilla".to_string(), "caramel".to_string()]
        );
        assert!(!second.iced());
        assert_ne!(first.id(), second.id());
        assert_ne!(first.price(), second.price());
    }

    #[test]
    fn test_clear_extras_keeps_base_and_size() {
        let mut builder = latte_small();
        builder
            .set_milk("oat")
            .unwrap()
            .add_syrup("vanilla")
            .unwrap()
            .set_sugar(3)
            .unwrap()
            .set_iced(true);
        assert!(builder.has_extras());

        builder.clear_extras();

        assert!(!builder.has_extras());
        assert_eq!(builder.base(), Some(Base::Latte));
        assert_eq!(builder.size(), Some(Size::Small));

        // Building right away prices the bare base + size
        let order = builder.build().unwrap();
        assert_eq!(order.price().rubles(), 300.0);
        assert_eq!(order.description(), "");
    }

    #[test]
    fn test_all_valid_combinations_price_positive_and_iced_increases() {
        for base in Base::ALL {
            for size in Size::ALL {
                for milk in Milk::ALL {
                    let mut builder = OrderBuilder::new();
                    builder
                        .set_base(base.as_str())
                        .unwrap()
                        .set_size(size.as_str())
                        .unwrap()
                        .set_milk(milk.as_str())
                        .unwrap()
                        .add_syrup("vanilla")
                        .unwrap()
                        .set_sugar(3)
                        .unwrap();

                    let still = builder.build().unwrap();
                    let iced = builder.set_iced(true).build().unwrap();

                    assert!(still.price().is_positive(), "{base} {size} {milk}");
                    assert!(iced.price() > still.price(), "{base} {size} {milk}");
                }
            }
        }
    }

    #[test]
    fn test_plain_espresso_renders_price_only() {
        let order = OrderBuilder::new()
            .set_base("espresso")
            .unwrap()
            .set_size("small")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(order.price().rubles(), 200.0);
        assert_eq!(order.description(), "");
        assert_eq!(order.to_string(), "200.00 RUB");
    }

    #[test]
    fn test_builder_serde_roundtrip() {
        let mut builder = latte_small();
        builder.add_syrup("vanilla").unwrap().set_iced(true);

        let json = serde_json::to_string(&builder).unwrap();
        let back: OrderBuilder = serde_json::from_str(&json).unwrap();

        assert_eq!(back.base(), builder.base());
        assert_eq!(back.syrups(), builder.syrups());
        assert_eq!(back.iced(), builder.iced());
    }

    #[test]
    fn test_default_builder_has_no_extras() {
        let builder = OrderBuilder::default();
        assert_eq!(builder.base(), None);
        assert_eq!(builder.size(), None);
        assert_eq!(builder.milk(), Milk::None);
        assert_eq!(builder.syrup_count(), 0);
        assert_eq!(builder.sugar(), 0);
        assert!(!builder.iced());
        assert!(!builder.has_extras());
    }
}
