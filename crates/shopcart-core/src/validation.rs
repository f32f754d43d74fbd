//! # Validation Module
//!
//! Input validation utilities for the shop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  └── Raw line of text                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_whole_number   "abc" → NotANumber                           │
//! │  ├── validate_selection   "9"   → OutOfRange (1..=5)                   │
//! │  └── validate_quantity    "0"   → MustBePositive                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart operations (assume validated input)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::{parse_whole_number, validate_quantity};
//!
//! let qty = parse_whole_number("3", "quantity").unwrap();
//! assert_eq!(validate_quantity(qty, 999).unwrap(), 3);
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Number Parsing
// =============================================================================

/// Parses a whole number typed by the user.
///
/// Surrounding whitespace is ignored. Anything else that is not an integer
/// (decimals, words, empty input) is a [`ValidationError::NotANumber`].
///
/// ```rust
/// use shopcart_core::validation::parse_whole_number;
///
/// assert_eq!(parse_whole_number(" 2 ", "quantity").unwrap(), 2);
/// assert_eq!(parse_whole_number("-1", "quantity").unwrap(), -1);
/// assert!(parse_whole_number("2.5", "quantity").is_err());
/// assert!(parse_whole_number("", "quantity").is_err());
/// ```
pub fn parse_whole_number(input: &str, field: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();

    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
            input: trimmed.to_string(),
        })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a 1-based menu selection against a list of `count` entries and
/// returns the matching zero-based index.
///
/// ## User Workflow
/// ```text
/// Store Inventory (5 products)
///      │
///      ▼
/// User types "2" ──► validate_selection(2, 5) ──► Ok(1)
/// User types "6" ──► validate_selection(6, 5) ──► OutOfRange { 1..=5 }
/// ```
pub fn validate_selection(number: i64, count: usize, field: &str) -> ValidationResult<usize> {
    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: i64::try_from(count).unwrap_or(i64::MAX),
    };

    let index = number
        .checked_sub(1)
        .and_then(|idx| usize::try_from(idx).ok())
        .ok_or_else(out_of_range)?;

    if index >= count {
        return Err(out_of_range());
    }

    Ok(index)
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max`
pub fn validate_quantity(qty: i64, max: u32) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > i64::from(max) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(max),
        });
    }

    // Bounded by `max` above.
    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(max),
    })
}

/// Validates a catalog price.
///
/// Zero is allowed (free items); negative prices are not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier: non-empty after trimming.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name: non-empty after trimming.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("7", "choice"), Ok(7));
        assert_eq!(parse_whole_number("  12\n", "choice"), Ok(12));

        assert_eq!(
            parse_whole_number("two", "quantity"),
            Err(ValidationError::NotANumber {
                field: "quantity".to_string(),
                input: "two".to_string(),
            })
        );
        assert!(parse_whole_number("1e3", "quantity").is_err());
        assert!(parse_whole_number("99999999999999999999", "quantity").is_err());
    }

    #[test]
    fn test_validate_selection() {
        assert_eq!(validate_selection(1, 5, "product number"), Ok(0));
        assert_eq!(validate_selection(5, 5, "product number"), Ok(4));

        let expected = Err(ValidationError::OutOfRange {
            field: "product number".to_string(),
            min: 1,
            max: 5,
        });
        assert_eq!(validate_selection(0, 5, "product number"), expected);
        assert_eq!(validate_selection(6, 5, "product number"), expected);
        assert_eq!(validate_selection(-3, 5, "product number"), expected);
        assert_eq!(validate_selection(i64::MIN, 5, "product number"), expected);
    }

    #[test]
    fn test_validate_selection_on_empty_list() {
        assert!(validate_selection(1, 0, "line number").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1, 999), Ok(1));
        assert_eq!(validate_quantity(999, 999), Ok(999));

        assert!(matches!(
            validate_quantity(0, 999),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_quantity(-4, 999),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_quantity(1000, 999),
            Err(ValidationError::OutOfRange { max: 999, .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(8999)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_product_strings() {
        assert!(validate_product_id("P001").is_ok());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_name("Gaming Mouse").is_ok());
        assert!(validate_product_name("").is_err());
    }
}
