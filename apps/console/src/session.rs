//! # Session
//!
//! The interactive loop and the state it owns.
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session                                          │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │   Console    │ │   Catalog    │ │     Cart     │ │  ShopConfig  │   │
//! │  │  stdin/out   │ │  read only   │ │   mutable    │ │  read only   │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Single thread, no globals: every command borrows what it needs.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use shopcart_core::{Cart, Catalog};
use tracing::{debug, info};

use crate::commands;
use crate::config::ShopConfig;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::MenuChoice;
use crate::render;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One shopper at one terminal.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    catalog: Catalog,
    cart: Cart,
    config: ShopConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session with an empty cart.
    pub fn new(console: Console<R, W>, catalog: Catalog, config: ShopConfig) -> Self {
        Session {
            console,
            catalog,
            cart: Cart::new(),
            config,
        }
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!(store = %self.config.store_name, "Session started");
        self.console
            .say(format!("Welcome to the {}!", self.config.store_name))?;

        loop {
            self.console.say_all(render::menu())?;

            let Some(input) = self.console.prompt("Enter choice: ")? else {
                info!("Input closed, ending session");
                self.console.say("")?;
                self.console.say("Goodbye!")?;
                break;
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                debug!(input = %input.trim(), "Unknown menu option");
                self.console.say("Invalid option. Please try again.")?;
                continue;
            };

            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        info!(lines_left = self.cart.len(), "Session ended");
        Ok(())
    }

    /// Runs a single menu command.
    pub fn dispatch(&mut self, choice: MenuChoice) -> ConsoleResult<Flow> {
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::ViewInventory => {
                commands::catalog::view_inventory(&mut self.console, &self.catalog, &self.config)?
            }
            MenuChoice::AddItem => commands::cart::add_to_cart(
                &mut self.console,
                &self.catalog,
                &mut self.cart,
                &self.config,
            )?,
            MenuChoice::ViewCart => {
                commands::cart::view_cart(&mut self.console, &self.cart, &self.config)?
            }
            MenuChoice::RemoveItem => {
                commands::cart::remove_from_cart(&mut self.console, &mut self.cart, &self.config)?
            }
            MenuChoice::ApplyCoupon => {
                commands::coupon::apply_coupon(&mut self.console, &mut self.cart)?
            }
            MenuChoice::Checkout => {
                commands::checkout::checkout(&mut self.console, &mut self.cart, &self.config)?
            }
            MenuChoice::Exit => {
                self.console.say("Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ends the session and returns the console, e.g. to read captured output.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
