//! # shopcart-console
//!
//! Interactive console front end for [`shopcart_core`].
//!
//! ## Module Organization
//! ```text
//! shopcart_console/
//! ├── lib.rs          ◄─── You are here (startup helpers)
//! ├── cli.rs          ◄─── clap flags
//! ├── config.rs       ◄─── ShopConfig (defaults, SHOPCART_* env, flags)
//! ├── console.rs      ◄─── prompt / print over any BufRead + Write
//! ├── menu.rs         ◄─── the seven menu options
//! ├── render.rs       ◄─── text formatting, money rounding for display
//! ├── session.rs      ◄─── menu loop owning catalog + cart
//! ├── commands/       ◄─── one function per menu flow
//! └── error.rs        ◄─── ConsoleError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse flags (clap)                                                  │
//! │  2. Load ShopConfig: defaults → SHOPCART_* → flags                      │
//! │  3. Initialize logging (stderr, RUST_LOG or config.log_level)           │
//! │  4. Build the standard catalog and an empty cart                        │
//! │  5. Run the menu loop on stdin / stdout                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod render;
pub mod session;

use std::io;

use shopcart_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use crate::config::ShopConfig;
pub use crate::console::Console;
pub use crate::error::{ConsoleError, ConsoleResult};
pub use crate::session::Session;

/// Runs an interactive session on the process's stdin and stdout.
pub fn run(config: ShopConfig) -> ConsoleResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    Session::new(console, Catalog::standard(), config).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `RUST_LOG=shopcart_core=trace` - Trace the cart only
/// - Otherwise: `config.log_level` (default `warn`)
///
/// Logs are written to stderr so they never mix with the menu.
pub fn init_tracing(config: &ShopConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        store = %config.store_name,
        currency = %config.currency_symbol,
        max_item_quantity = config.max_item_quantity,
        "Configuration loaded"
    );
}
