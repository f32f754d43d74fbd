//! Coupon entry.

use std::io::{BufRead, Write};

use shopcart_core::{Cart, Coupon, CouponOutcome};

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render::percentage;

/// Asks for a code and applies it. Unknown codes clear any active discount.
pub fn apply_coupon<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &mut Cart,
) -> ConsoleResult<()> {
    let hint = Coupon::ALL
        .iter()
        .map(|coupon| format!("'{}'", coupon.code()))
        .collect::<Vec<_>>()
        .join(" or ");

    let Some(raw) = console.prompt(&format!("Enter coupon code (Try {hint}): "))? else {
        return Ok(());
    };

    match cart.apply_coupon(raw.trim()) {
        CouponOutcome::Applied(coupon) => console.say(format!(
            "Success! {} discount applied.",
            percentage(coupon.rate())
        )),
        CouponOutcome::Rejected => console.say("Invalid or expired coupon code."),
    }
}
