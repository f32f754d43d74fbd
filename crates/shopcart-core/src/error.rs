//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Cart / catalog rule violations                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  └── ConsoleError     - I/O and configuration failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed to the user, loop goes on │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (position, field, input)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! An invalid coupon code is deliberately NOT an error; see
//! [`crate::coupon::CouponOutcome`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Positional removal outside the current cart lines.
    ///
    /// ## When This Occurs
    /// - Removing from an empty cart
    /// - Removing line 5 when the cart has 3 lines
    ///
    /// The cart is left untouched.
    #[error("Line {position} is out of range (cart has {len} lines)")]
    LineOutOfRange { position: usize, len: usize },

    /// Checkout was requested on a cart with no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input (or catalog data) doesn't meet
/// requirements. Used for early validation before cart logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text was entered where a whole number was expected.
    #[error("{field} must be a whole number, got '{input}'")]
    NotANumber { field: String, input: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two catalog entries sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
