//! # shopcart
//!
//! Console shopping cart.
//!
//! ```text
//! $ shopcart --store-name "Corner Shop"
//! Welcome to the Corner Shop!
//!
//! --- Main Menu ---
//! 1. View Inventory
//! ...
//! ```

use anyhow::Result;
use clap::Parser;
use shopcart_console::cli::Cli;
use shopcart_console::ShopConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ShopConfig::load(&cli)?;

    // The actual setup is in lib.rs for better testability
    shopcart_console::init_tracing(&config);
    shopcart_console::run(config)?;

    Ok(())
}
