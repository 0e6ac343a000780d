//! # barista-core: Pure Business Logic for Barista POS
//!
//! This crate is the **heart** of Barista POS. It contains all business logic
//! for pricing and describing a customizable coffee order, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Barista POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Future Counter / Kiosk Frontends                   │   │
//! │  │      Menu UI ──► Order UI ──► Checkout UI ──► Receipt UI       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ barista-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   price   │  │  builder  │  │   order   │  │   │
//! │  │   │ Base/Size │  │   Price   │  │  Order-   │  │   Order   │  │   │
//! │  │   │   Milk    │  │ RUB maths │  │  Builder  │  │ (frozen)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed menu: drink bases, sizes, milks, flat rates
//! - [`price`] - Price type in rubles with 2-decimal display
//! - [`builder`] - Fluent, validating [`OrderBuilder`]
//! - [`order`] - Immutable, finalized [`Order`] with frozen price/description
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Frozen Orders**: Price and description are computed once at build time
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::OrderBuilder;
//!
//! let order = OrderBuilder::new()
//!     .set_base("latte").unwrap()
//!     .set_size("medium").unwrap()
//!     .set_milk("oat").unwrap()
//!     .add_syrup("vanilla").unwrap()
//!     .set_sugar(2).unwrap()
//!     .set_iced(true)
//!     .build()
//!     .unwrap();
//!
//! // (300 + 60 + 40) × 1.2 + 20
//! assert_eq!(order.price().rubles(), 500.0);
//! assert!(order.description().contains("medium latte"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod error;
pub mod order;
pub mod price;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use barista_core::Order` instead of
// `use barista_core::order::Order`

pub use builder::OrderBuilder;
pub use catalog::{Base, Milk, Size};
pub use error::{OrderError, OrderResult};
pub use order::Order;
pub use price::Price;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct syrups in a single order
///
/// ## Business Reason
/// More than four syrups drowns the drink; baristas refuse such orders at the
/// counter, so the builder refuses them in software too.
pub const MAX_SYRUPS: usize = 4;

/// Maximum teaspoons of sugar in a single order
///
/// ## Business Reason
/// Keeps recipes within what a standard cup can dissolve. Sugar is free, so
/// the cap is the only control on it.
pub const MAX_SUGAR_TSP: i64 = 5;
