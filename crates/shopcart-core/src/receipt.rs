//! # Receipt
//!
//! Immutable record of a confirmed checkout.
//!
//! Uses the snapshot pattern: the lines, the discount and the totals are
//! frozen at the moment the order was placed. No payment is processed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{CartLineItem, CartTotals};
use crate::types::DiscountRate;

/// A completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Order reference shown to the customer (UUID v4).
    pub order_id: Uuid,
    /// Lines at time of checkout (frozen).
    pub items: Vec<CartLineItem>,
    /// Discount that was active at checkout.
    pub discount: DiscountRate,
    /// Totals at time of checkout, unrounded.
    pub totals: CartTotals,
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    pub(crate) fn new(items: Vec<CartLineItem>, discount: DiscountRate, totals: CartTotals) -> Self {
        Receipt {
            order_id: Uuid::new_v4(),
            items,
            discount,
            totals,
            completed_at: Utc::now(),
        }
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
