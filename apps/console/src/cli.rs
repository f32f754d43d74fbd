//! Command-line flags.
//!
//! Every flag is optional and overrides the matching `SHOPCART_*`
//! environment variable (see [`crate::config`]).

use clap::Parser;

#[derive(Debug, Default, Clone, Parser)]
#[command(
    name = "shopcart",
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[arg(long, help = "Store name shown in the welcome banner.")]
    pub store_name: Option<String>,

    #[arg(long, help = "Symbol printed in front of every amount.")]
    pub currency_symbol: Option<String>,

    #[arg(long, help = "Largest quantity accepted for a single cart line.")]
    pub max_quantity: Option<u32>,

    #[arg(
        long,
        help = "Log filter, e.g. 'info' or 'shopcart_core=debug'. RUST_LOG wins when set."
    )]
    pub log_level: Option<String>,
}
