//! # Cart
//!
//! The shopping cart and its pricing rules.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add(product, qty) ─────► items.push(line)      (never merges)          │
//! │  remove_at(pos) ────────► items.remove(pos)     (later lines shift up)  │
//! │  apply_coupon(code) ────► discount = rate | 0   (never stacks)          │
//! │  compute_totals() ──────► CartTotals            (read only)             │
//! │  clear() ───────────────► items = [], discount = 0                      │
//! │  checkout() ────────────► Receipt, then clear()                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing
//! ```text
//! subtotal        = Σ unit_price × qty
//! shipping_total  = Σ shipping_fee × qty        (physical lines only)
//! discount_amount = subtotal × discount rate    (shipping is never discounted)
//! final_total     = subtotal − discount_amount + shipping_total
//! ```
//! Every figure is exact; rounding happens only when a figure is displayed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coupon::{Coupon, CouponOutcome};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::Receipt;
use crate::types::{DiscountRate, Product};

// =============================================================================
// Line Item
// =============================================================================

/// One cart entry: a product and how many units of it.
///
/// The product is a frozen copy taken when the line was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        CartLineItem { product, quantity }
    }

    /// Unit price × quantity. Shipping is not included.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Shipping fee × quantity; zero for digital products.
    pub fn shipping(&self) -> Money {
        self.product.shipping_fee().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Computed cart figures, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping_total: Money,
    pub discount_amount: Money,
    pub final_total: Money,
}

impl CartTotals {
    /// Applies the pricing rules to a set of lines.
    pub fn compute(items: &[CartLineItem], discount: DiscountRate) -> Self {
        let subtotal: Money = items.iter().map(CartLineItem::line_total).sum();
        let shipping_total: Money = items.iter().map(CartLineItem::shipping).sum();
        let discount_amount = subtotal.percentage_of(discount);
        let final_total = subtotal - discount_amount + shipping_total;

        CartTotals {
            subtotal,
            shipping_total,
            discount_amount,
            final_total,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines keep insertion order; positions are zero-based indexes into it
/// - The same product may appear on several lines
/// - Quantity on every line is > 0 (callers validate before `add`)
/// - Exactly one discount rate is active at a time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
    discount: DiscountRate,
}

impl Cart {
    /// Creates a new empty cart with no discount.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a new line for `product`.
    ///
    /// Adding a product that is already in the cart creates a second line.
    /// `quantity` must be positive; use
    /// [`validate_quantity`](crate::validation::validate_quantity) first.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        debug_assert!(quantity > 0, "cart quantities are validated by the caller");

        self.items.push(CartLineItem::new(product.clone(), quantity));
        info!(product_id = %product.id, quantity, lines = self.items.len(), "Added to cart");
    }

    /// Removes the line at a zero-based position and returns it.
    ///
    /// ## Errors
    /// `LineOutOfRange` when `position >= len()`; the cart is unchanged.
    pub fn remove_at(&mut self, position: usize) -> CoreResult<CartLineItem> {
        if position >= self.items.len() {
            debug!(position, len = self.items.len(), "Remove rejected");
            return Err(CoreError::LineOutOfRange {
                position,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(position);
        info!(product_id = %removed.product.id, position, "Removed from cart");
        Ok(removed)
    }

    /// Applies a coupon code, replacing any active discount.
    ///
    /// Unknown codes reset the discount to zero and report `Rejected`.
    pub fn apply_coupon(&mut self, code: &str) -> CouponOutcome {
        let outcome = match Coupon::from_code(code) {
            Some(coupon) => CouponOutcome::Applied(coupon),
            None => CouponOutcome::Rejected,
        };

        self.discount = outcome.rate();
        info!(?outcome, discount_bps = self.discount.bps(), "Coupon evaluated");
        outcome
    }

    /// Computes subtotal, shipping, discount and final total.
    pub fn compute_totals(&self) -> CartTotals {
        CartTotals::compute(&self.items, self.discount)
    }

    /// Empties the cart and resets the discount.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = DiscountRate::zero();
        debug!("Cart cleared");
    }

    /// Finalizes the order: snapshots the cart into a [`Receipt`] and clears it.
    ///
    /// ## Errors
    /// `EmptyCart` when there is nothing to buy; nothing changes.
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let receipt = Receipt::new(self.items.clone(), self.discount, self.compute_totals());
        info!(
            order_id = %receipt.order_id,
            lines = receipt.items.len(),
            total = %receipt.totals.final_total,
            "Checkout completed"
        );

        self.clear();
        Ok(receipt)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Currently active discount.
    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
