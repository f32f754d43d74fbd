//! # shopcart-core: Pure Business Logic for the Console Shop
//!
//! Everything the store knows about money, products, coupons and carts,
//! as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/console (shopcart binary)                  │   │
//! │  │    Menu ──► Add flow ──► Coupon flow ──► Checkout flow          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ coupon  │ │validation│  │   │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ JAVA20  │ │  rules   │  │   │
//! │  │   │ Catalog │ │         │ │ Receipt │ │WELCOME10│ │          │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and DiscountRate
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`catalog`] - The read-only product list
//! - [`coupon`] - The two hardcoded coupon codes
//! - [`cart`] - Cart, line items and totals
//! - [`receipt`] - Snapshot produced by checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Catalog};
//!
//! let catalog = Catalog::standard();
//! let mut cart = Cart::new();
//!
//! let keyboard = catalog.get(0).unwrap(); // $89.99, ships for $10.00
//! cart.add(keyboard, 2);
//! cart.apply_coupon("java20");
//!
//! let totals = cart.compute_totals();
//! assert_eq!(totals.subtotal.to_string(), "$179.98");
//! assert_eq!(totals.final_total.to_string(), "$163.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod coupon;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLineItem, CartTotals};
pub use catalog::Catalog;
pub use coupon::{Coupon, CouponOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::Receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum quantity for a single line.
///
/// Stops a typo like 1000 instead of 10. The console can lower or raise it
/// through configuration.
pub const MAX_ITEM_QUANTITY: u32 = 999;
