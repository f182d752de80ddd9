//! Product Catalog - a small HTTP service for a fixed product list
//!
//! Serves the catalog through a cache-aside accessor with a ten-minute
//! absolute expiry.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use catalog::{generate_products, Category, Product, ProductService};
pub use config::Config;
pub use error::CatalogError;
pub use tasks::spawn_cleanup_task;
