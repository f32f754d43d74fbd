//! # Coupons
//!
//! The store honours exactly two hardcoded codes:
//!
//! | Code        | Discount |
//! |-------------|----------|
//! | `JAVA20`    | 20%      |
//! | `WELCOME10` | 10%      |
//!
//! Codes match case-insensitively. Coupons never stack: applying a code
//! replaces whatever discount was active, and an unknown code resets the
//! discount to zero.

use serde::{Deserialize, Serialize};

use crate::types::DiscountRate;

/// A recognised coupon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Coupon {
    /// `JAVA20`: 20% off the subtotal.
    Java20,
    /// `WELCOME10`: 10% off the subtotal.
    Welcome10,
}

impl Coupon {
    /// Every coupon the store accepts, in the order they are advertised.
    pub const ALL: [Coupon; 2] = [Coupon::Java20, Coupon::Welcome10];

    /// Canonical (upper-case) code.
    pub const fn code(self) -> &'static str {
        match self {
            Coupon::Java20 => "JAVA20",
            Coupon::Welcome10 => "WELCOME10",
        }
    }

    /// Discount granted by this coupon.
    pub const fn rate(self) -> DiscountRate {
        match self {
            Coupon::Java20 => DiscountRate::from_bps(2000),
            Coupon::Welcome10 => DiscountRate::from_bps(1000),
        }
    }

    /// Looks up a code, ignoring ASCII case. Surrounding whitespace is NOT
    /// trimmed here; the input layer does that.
    pub fn from_code(code: &str) -> Option<Coupon> {
        Coupon::ALL
            .into_iter()
            .find(|coupon| coupon.code().eq_ignore_ascii_case(code))
    }
}

/// Result of applying a code to the cart.
///
/// A rejected code is a defined outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponOutcome {
    /// The code was recognised and its discount is now active.
    Applied(Coupon),
    /// The code was not recognised; the discount was reset to zero.
    Rejected,
}

impl CouponOutcome {
    /// Discount now active on the cart.
    pub fn rate(self) -> DiscountRate {
        match self {
            CouponOutcome::Applied(coupon) => coupon.rate(),
            CouponOutcome::Rejected => DiscountRate::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_case_insensitively() {
        assert_eq!(Coupon::from_code("JAVA20"), Some(Coupon::Java20));
        assert_eq!(Coupon::from_code("java20"), Some(Coupon::Java20));
        assert_eq!(Coupon::from_code("Welcome10"), Some(Coupon::Welcome10));
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert_eq!(Coupon::from_code(""), None);
        assert_eq!(Coupon::from_code("JAVA2"), None);
        assert_eq!(Coupon::from_code("JAVA200"), None);
        assert_eq!(Coupon::from_code(" JAVA20"), None);
    }

    #[test]
    fn test_rates() {
        assert_eq!(Coupon::Java20.rate().bps(), 2000);
        assert_eq!(Coupon::Welcome10.rate().bps(), 1000);
        assert!(CouponOutcome::Rejected.rate().is_zero());
        assert_eq!(CouponOutcome::Applied(Coupon::Welcome10).rate().bps(), 1000);
    }
}
