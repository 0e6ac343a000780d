//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         OrderError                                      │
//! │                                                                         │
//! │  InvalidOption  - unrecognized base/size/milk key                      │
//! │                   (message enumerates the valid keys)                  │
//! │  LimitExceeded  - a 5th distinct syrup was requested                   │
//! │  OutOfRange     - sugar outside 0..=5 teaspoons                        │
//! │  MissingField   - build() called before base and size were chosen     │
//! │                                                                         │
//! │  All raised synchronously at the point of violation; none are         │
//! │  recovered internally. A failed setter leaves prior state unchanged.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a message a cashier could read aloud

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Order construction errors.
///
/// These errors represent business rule violations. They should be caught and
/// shown to whoever is keying in the order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// An unrecognized base/size/milk value was supplied.
    ///
    /// ## When This Occurs
    /// - A typo at the counter ("expresso")
    /// - A frontend shipping menu keys the core does not know about
    #[error("{field} must be one of: {allowed} (got '{value}')")]
    InvalidOption {
        field: String,
        value: String,
        /// The valid keys, comma-space joined for the message.
        allowed: String,
    },

    /// Adding another distinct syrup would exceed the maximum.
    #[error("no more than {max} {field} allowed")]
    LimitExceeded { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A required field was never set before `build()`.
    #[error("{field} is required")]
    MissingField { field: String },
}

impl OrderError {
    /// Builds an [`OrderError::InvalidOption`] with the allowed keys joined
    /// into a readable list.
    pub(crate) fn invalid_option(field: &str, value: &str, allowed: &[&str]) -> Self {
        OrderError::InvalidOption {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
