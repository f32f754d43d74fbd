//! # Checkout
//!
//! ```text
//! empty cart? ──yes──► "Cart is empty. Add items first."
//!      │no
//!      ▼
//! show cart + final total
//!      │
//!      ▼
//! "Confirm purchase? (yes/no): " ──anything but yes──► "Checkout cancelled."
//!      │yes
//!      ▼
//! cart.checkout() ──► receipt printed, cart cleared
//! ```
//!
//! No payment is processed.

use std::io::{BufRead, Write};

use shopcart_core::Cart;
use tracing::info;

use crate::config::ShopConfig;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render::Renderer;

use super::cart::view_cart;

/// Confirms and completes the order.
pub fn checkout<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &mut Cart,
    config: &ShopConfig,
) -> ConsoleResult<()> {
    if cart.is_empty() {
        return console.say("Cart is empty. Add items first.");
    }

    let renderer = Renderer::new(&config.currency_symbol);

    view_cart(console, cart, config)?;
    console.say(format!(
        "Final Total to charge: {}",
        renderer.money(cart.compute_totals().final_total)
    ))?;

    let Some(answer) = console.prompt("Confirm purchase? (yes/no): ")? else {
        return Ok(());
    };
    if !is_confirmation(&answer) {
        info!("Checkout cancelled by user");
        return console.say("Checkout cancelled.");
    }

    console.say("Processing payment...")?;
    match cart.checkout() {
        Ok(receipt) => console.say_all(renderer.receipt(&receipt)),
        Err(err) => console.reject(&err),
    }
}

/// Only "yes" (any case) confirms.
fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
