//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64:                                                                │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  THE INTEGER CENTS PROBLEM                                              │
//! │    20% of $179.98 = $35.996  → 3599.6 cents, not representable         │
//! │                                                                         │
//! │  OUR SOLUTION: Exact decimals, rounded only for display                 │
//! │    179.98 × 0.2000 = 35.99600 (exact)                                   │
//! │    Display: $36.00                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! // Create from cents (preferred for catalog prices)
//! let price = Money::from_cents(8999); // $89.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // $179.98
//! let total = doubled + Money::from_cents(2000); // $199.98
//! assert_eq!(total.to_string(), "$199.98");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;

/// Decimal places shown when money is displayed.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in major currency units (dollars).
///
/// ## Design Decisions
/// - **Decimal**: exact base-10 arithmetic, no binary float drift
/// - **Full precision internally**: only [`Money::rounded`] and `Display`
///   round, so a discount of $35.996 stays $35.996 through the total
/// - **Signed**: discounts may be shown as negative adjustments
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► CartLineItem.line_total ──► CartTotals.subtotal
///                 │                                      │
/// Physical.ship ──┴──► CartLineItem.shipping ───► CartTotals.shipping_total
///                                                        │
///                          subtotal × DiscountRate ──► discount_amount
///                                                        │
///                                                        ▼
///                                               CartTotals.final_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(4550); // Represents $45.50
    /// assert_eq!(price.to_string(), "$45.50");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1999); // $19.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(5997)); // $59.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns `rate` percent of this amount, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    /// use shopcart_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(17998); // $179.98
    /// let discount = subtotal.percentage_of(DiscountRate::from_bps(2000)); // 20%
    ///
    /// // Sub-cent precision is kept: $35.996
    /// assert_eq!(discount.amount().to_string(), "35.996");
    /// ```
    pub fn percentage_of(&self, rate: DiscountRate) -> Money {
        Money((self.0 * rate.fraction()).normalize())
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let raw = Money::from_decimal(Decimal::new(163984, 3)); // 163.984
    /// assert_eq!(raw.rounded(), Money::from_cents(16398));
    /// ```
    pub fn rounded(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Formats the amount with a currency symbol and two decimal places.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).format_with("€"), "€10.00");
    /// assert_eq!(Money::from_cents(-550).format_with("$"), "-$5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let rounded = self.rounded().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let mut magnitude = rounded.abs();
        magnitude.rescale(DISPLAY_DECIMALS);

        format!("{sign}{symbol}{magnitude}")
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money in dollars with two decimals, e.g. `$10.99`.
///
/// The console uses [`Money::format_with`] when a different symbol is
/// configured.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
