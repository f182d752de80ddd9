//! Catalog data model
//!
//! Field names serialize exactly as declared (`Id`, `Name`, ...) and prices
//! serialize as exact JSON numbers.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable shared snapshot of the product list, as stored in the cache.
pub type ProductList = Arc<[Product]>;

/// A product category embedded in each product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Currency amount; serialized from its decimal text, never through `f64`
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub stock: i32,
    pub category: Category,
}

impl Product {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            category,
        }
    }
}
