//! Catalog Module
//!
//! The product data model, the fixed inventory source, and the cache-aside
//! accessor that serves it.

mod model;
mod service;
mod source;

pub use model::{Category, Product, ProductList};
pub use service::{ProductService, DEFAULT_PRODUCT_TTL, PRODUCT_LIST_KEY};
pub use source::{generate_products, CatalogSource, StaticCatalog};
