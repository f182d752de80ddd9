//! Catalog source
//!
//! Produces the fixed in-process inventory.

use std::fmt::Debug;

use rust_decimal::Decimal;

use super::model::{Category, Product};

/// Something that can produce the full product list on demand.
pub trait CatalogSource: Send + Sync + Debug {
    fn generate(&self) -> Vec<Product>;
}

/// The built-in, constant inventory.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn generate(&self) -> Vec<Product> {
        generate_products()
    }
}

/// Builds the fixed three-product inventory. Every call returns a fresh,
/// identical list.
pub fn generate_products() -> Vec<Product> {
    let electronics = Category::new(101, "Electronics");
    let accessories = Category::new(102, "Accessories");

    vec![
        Product::new(1, "Laptop", Decimal::new(120050, 2), 25, electronics),
        Product::new(2, "Headphones", Decimal::new(5000, 2), 100, accessories.clone()),
        Product::new(3, "USB-C Cable", Decimal::new(1599, 2), 250, accessories),
    ]
}
