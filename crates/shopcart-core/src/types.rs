//! # Domain Types
//!
//! Core domain types used throughout the shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────┐        ┌─────────────────┐            │
//! │  │          Product             │        │  DiscountRate   │            │
//! │  │  ──────────────────────────  │        │  ─────────────  │            │
//! │  │  id      "P001"              │        │  bps (u32)      │            │
//! │  │  name    "Gaming Mouse"      │        │  2000 = 20%     │            │
//! │  │  price   Money               │        └─────────────────┘            │
//! │  │  kind ──┬── Physical         │                                       │
//! │  │         │   weight_kg        │                                       │
//! │  │         │   shipping_fee     │                                       │
//! │  │         └── Digital          │                                       │
//! │  │             download_url     │                                       │
//! │  └──────────────────────────────┘                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Prefix for the download reference of every digital product.
pub const DOWNLOAD_BASE_URL: &str = "http://store.com/download/";

/// 100% expressed in basis points.
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 2000 bps = 20%.
/// Keeps the rate an integer while the applied amount stays exact.
///
/// Values above 100% are clamped to 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points, clamped to 100%.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > MAX_DISCOUNT_BPS {
            DiscountRate(MAX_DISCOUNT_BPS)
        } else {
            DiscountRate(bps)
        }
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction in `[0, 1]` (0.2 for 20%).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Product
// =============================================================================

/// Variant-specific product data.
///
/// Shipping is dispatched on this tag (see [`Product::shipping_fee`]) rather
/// than through trait objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    /// Shipped goods: a flat shipping fee is charged per unit.
    Physical {
        /// Shipping weight, shown in the catalog listing.
        weight_kg: f64,
        /// Flat fee charged for every unit ordered.
        shipping_fee: Money,
    },
    /// Delivered by download, never shipped.
    Digital {
        /// Where the buyer downloads the product.
        download_url: String,
    },
}

/// A product available for sale.
///
/// Immutable once created; the catalog only hands out shared references and
/// cart lines keep a frozen copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, unique within the catalog ("P001", "D002").
    pub id: String,

    /// Display name shown in listings and cart lines.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Physical or digital specifics.
    #[serde(flatten)]
    pub kind: ProductKind,
}

impl Product {
    /// Creates a physical product.
    pub fn physical(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        weight_kg: f64,
        shipping_fee: Money,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            kind: ProductKind::Physical {
                weight_kg,
                shipping_fee,
            },
        }
    }

    /// Creates a digital product. The download reference is derived from the id.
    pub fn digital(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        let id = id.into();
        let download_url = format!("{DOWNLOAD_BASE_URL}{id}");

        Product {
            id,
            name: name.into(),
            price,
            kind: ProductKind::Digital { download_url },
        }
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Per-unit shipping fee. Digital products never ship.
    pub fn shipping_fee(&self) -> Money {
        match &self.kind {
            ProductKind::Physical { shipping_fee, .. } => *shipping_fee,
            ProductKind::Digital { .. } => Money::zero(),
        }
    }

    /// Whether the product is shipped.
    #[inline]
    pub fn is_physical(&self) -> bool {
        matches!(self.kind, ProductKind::Physical { .. })
    }

    /// Short label for listings: "Physical" or "Digital".
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ProductKind::Physical { .. } => "Physical",
            ProductKind::Digital { .. } => "Digital",
        }
    }

    /// Download reference for digital products.
    pub fn download_url(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Digital { download_url } => Some(download_url),
            ProductKind::Physical { .. } => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
