//! Inventory listing.

use std::io::{BufRead, Write};

use shopcart_core::Catalog;

use crate::config::ShopConfig;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render::Renderer;

/// Prints every product, numbered from 1.
pub fn view_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    config: &ShopConfig,
) -> ConsoleResult<()> {
    console.say_all(Renderer::new(&config.currency_symbol).inventory(catalog))
}
