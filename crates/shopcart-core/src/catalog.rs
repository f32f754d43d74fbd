//! # Catalog
//!
//! The read-only product list. Built once at startup, never mutated.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_price, validate_product_id, validate_product_name};

/// Ordered, immutable list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// ## Errors
    /// - `Required` for an empty id or name
    /// - `MustBePositive` for a negative price or shipping fee
    /// - `Duplicate` when two products share an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product_id(&product.id)?;
            validate_product_name(&product.name)?;
            validate_price(product.price)?;
            validate_price(product.shipping_fee())?;

            if !seen.insert(product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }

        debug!(products = products.len(), "Catalog built");
        Ok(Catalog { products })
    }

    /// The store's fixed inventory.
    pub fn standard() -> Self {
        Catalog {
            products: standard_products(),
        }
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Product at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Looks a product up by its id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

fn standard_products() -> Vec<Product> {
    vec![
        Product::physical(
            "P001",
            "Mechanical Keyboard",
            Money::from_cents(8999),
            1.2,
            Money::from_cents(1000),
        ),
        Product::physical(
            "P002",
            "Gaming Mouse",
            Money::from_cents(4550),
            0.3,
            Money::from_cents(500),
        ),
        Product::physical(
            "P003",
            "27in Monitor",
            Money::from_cents(19999),
            5.5,
            Money::from_cents(2500),
        ),
        Product::digital("D001", "Java Masterclass Ebook", Money::from_cents(2999)),
        Product::digital("D002", "Antivirus Software", Money::from_cents(1999)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let ids: Vec<&str> = catalog.list().iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, ["P001", "P002", "P003", "D001", "D002"]);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_standard_catalog_passes_validation() {
        let validated = Catalog::new(standard_products()).unwrap();
        assert_eq!(validated, Catalog::standard());
    }

    #[test]
    fn test_get_and_find() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.get(0).map(|p| p.name.as_str()), Some("Mechanical Keyboard"));
        assert!(catalog.get(5).is_none());

        let monitor = catalog.find("P003").unwrap();
        assert_eq!(monitor.price, Money::from_cents(19999));
        assert_eq!(monitor.shipping_fee(), Money::from_cents(2500));
        assert!(catalog.find("X999").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Product::digital("D001", "First", Money::from_cents(100)),
            Product::digital("D001", "Second", Money::from_cents(200)),
        ]);

        assert_eq!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: "D001".to_string(),
            }))
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![Product::digital(
            "D009",
            "Refund Voucher",
            Money::from_cents(-500),
        )]);

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
