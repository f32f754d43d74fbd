//! # Cart Commands
//!
//! ## Add Flow
//! ```text
//! list inventory
//!      │
//!      ▼
//! "Enter product number to add: " ── not a number / out of range ──► reject
//!      │
//!      ▼
//! "Enter quantity: " ── not a number / ≤ 0 / above max ──► reject
//!      │
//!      ▼
//! cart.add(product, qty)  (always a new line)
//! ```

use std::io::{BufRead, Write};

use shopcart_core::validation::{parse_whole_number, validate_quantity, validate_selection};
use shopcart_core::{Cart, Catalog};
use tracing::debug;

use crate::config::ShopConfig;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render::Renderer;

use super::catalog::view_inventory;

/// Prints the cart lines and totals.
pub fn view_cart<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &Cart,
    config: &ShopConfig,
) -> ConsoleResult<()> {
    console.say_all(Renderer::new(&config.currency_symbol).cart(cart))
}

/// Asks for a product and a quantity, then appends a cart line.
pub fn add_to_cart<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    cart: &mut Cart,
    config: &ShopConfig,
) -> ConsoleResult<()> {
    view_inventory(console, catalog, config)?;

    let Some(raw) = console.prompt("Enter product number to add: ")? else {
        return Ok(());
    };
    let index = match parse_whole_number(&raw, "product number")
        .and_then(|number| validate_selection(number, catalog.len(), "product number"))
    {
        Ok(index) => index,
        Err(err) => return console.reject(&err),
    };
    let Some(product) = catalog.get(index) else {
        return Ok(());
    };

    let Some(raw) = console.prompt("Enter quantity: ")? else {
        return Ok(());
    };
    let quantity = match parse_whole_number(&raw, "quantity")
        .and_then(|qty| validate_quantity(qty, config.max_item_quantity))
    {
        Ok(quantity) => quantity,
        Err(err) => return console.reject(&err),
    };

    cart.add(product, quantity);
    console.say(format!("Added {quantity} x {} to cart.", product.name))
}

/// Shows the cart, asks for a line number and removes that line.
pub fn remove_from_cart<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &mut Cart,
    config: &ShopConfig,
) -> ConsoleResult<()> {
    view_cart(console, cart, config)?;
    if cart.is_empty() {
        return Ok(());
    }

    let Some(raw) = console.prompt("Enter line number to remove: ")? else {
        return Ok(());
    };
    let position = match parse_whole_number(&raw, "line number")
        .and_then(|number| validate_selection(number, cart.len(), "line number"))
    {
        Ok(position) => position,
        Err(err) => return console.reject(&err),
    };

    match cart.remove_at(position) {
        Ok(removed) => console.say(format!("Removed {} from cart.", removed.product.name)),
        Err(err) => {
            debug!(%err, "Remove failed after validation");
            console.reject(&err)
        }
    }
}
