//! Text rendering for the console.
//!
//! Pure string building; printing happens in [`crate::console`]. Amounts are
//! rounded to two decimals here and nowhere earlier.

use shopcart_core::{
    Cart, CartLineItem, CartTotals, Catalog, DiscountRate, Money, Product, ProductKind, Receipt,
};

use crate::menu::MenuChoice;

const RULE: &str = "------------------------------------------------";

/// Formats amounts with the configured currency symbol.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    symbol: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(symbol: &'a str) -> Self {
        Renderer { symbol }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with(self.symbol)
    }

    /// One-line description used in the inventory listing.
    ///
    /// ```text
    /// Gaming Mouse [Physical] - $45.50 (+ $5.00 shipping) - Weight: 0.3kg
    /// Antivirus Software [Digital] - $19.99 - Instant Download
    /// ```
    pub fn product_details(&self, product: &Product) -> String {
        match &product.kind {
            ProductKind::Physical {
                weight_kg,
                shipping_fee,
            } => format!(
                "{} [{}] - {} (+ {} shipping) - Weight: {:.1}kg",
                product.name,
                product.kind_label(),
                self.money(product.price),
                self.money(*shipping_fee),
                weight_kg
            ),
            ProductKind::Digital { .. } => format!(
                "{} [{}] - {} - Instant Download",
                product.name,
                product.kind_label(),
                self.money(product.price)
            ),
        }
    }

    pub fn inventory(&self, catalog: &Catalog) -> Vec<String> {
        let mut lines = vec![String::new(), "--- Store Inventory ---".to_string()];
        lines.extend(
            catalog
                .list()
                .iter()
                .enumerate()
                .map(|(i, product)| format!("{}. {}", i + 1, self.product_details(product))),
        );
        lines
    }

    /// Numbered cart lines followed by the totals block.
    pub fn cart(&self, cart: &Cart) -> Vec<String> {
        if cart.is_empty() {
            return vec![String::new(), "--- Your Cart is Empty ---".to_string()];
        }

        let mut lines = vec![String::new(), "--- Current Cart ---".to_string()];
        lines.extend(
            cart.items()
                .iter()
                .enumerate()
                .map(|(i, line)| self.cart_line(i + 1, line)),
        );
        lines.extend(self.totals(&cart.compute_totals(), cart.discount()));
        lines
    }

    fn cart_line(&self, number: usize, line: &CartLineItem) -> String {
        let shipping = line.shipping();
        let shipping_note = if shipping.is_positive() {
            format!(" (+ {} ship)", self.money(shipping))
        } else {
            String::new()
        };

        format!(
            "{}. {:<20} | Qty: {} | Price: {} | Sub: {}{}",
            number,
            line.product.name,
            line.quantity,
            self.money(line.product.price),
            self.money(line.line_total()),
            shipping_note
        )
    }

    /// The totals block. The discount row only appears when a coupon is active.
    pub fn totals(&self, totals: &CartTotals, discount: DiscountRate) -> Vec<String> {
        let mut lines = vec![
            RULE.to_string(),
            format!("Subtotal:          {}", self.money(totals.subtotal)),
        ];

        if !discount.is_zero() {
            lines.push(format!(
                "Discount ({}):   -{}",
                percentage(discount),
                self.money(totals.discount_amount)
            ));
        }

        lines.push(format!("Shipping:          {}", self.money(totals.shipping_total)));
        lines.push(format!("TOTAL:             {}", self.money(totals.final_total)));
        lines.push(RULE.to_string());
        lines
    }

    pub fn receipt(&self, receipt: &Receipt) -> Vec<String> {
        vec![
            "Payment Successful! Thank you for your order.".to_string(),
            format!("Order reference: {}", receipt.order_id),
            format!(
                "{} item(s), charged {}",
                receipt.total_quantity(),
                self.money(receipt.totals.final_total)
            ),
        ]
    }
}

/// "20%", or "12.5%" for rates that are not whole percentages.
pub fn percentage(rate: DiscountRate) -> String {
    if rate.bps() % 100 == 0 {
        format!("{}%", rate.bps() / 100)
    } else {
        format!("{}%", rate.percentage())
    }
}

pub fn menu() -> Vec<String> {
    let mut lines = vec![String::new(), "--- Main Menu ---".to_string()];
    lines.extend(MenuChoice::ALL.iter().map(ToString::to_string));
    lines
}
