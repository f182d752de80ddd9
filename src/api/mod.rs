//! API Module
//!
//! HTTP handlers and routing for the catalog server.
//!
//! # Endpoints
//! - `GET /api/products` - Product list, cached for ten minutes
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{cors_layer, create_router, PRODUCTS_PATH};
