//! API Handlers
//!
//! HTTP request handlers for each catalog server endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::Uri, Json};

use crate::cache::{MemoryCache, SystemClock};
use crate::catalog::{CatalogSource, ProductList, ProductService, StaticCatalog};
use crate::config::Config;
use crate::error::CatalogError;
use crate::models::{HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the product accessor and a handle on the cache it reads through,
/// kept for statistics and the cleanup task.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside accessor for the product list
    pub products: Arc<ProductService>,
    /// Cache backing the accessor
    pub cache: MemoryCache<ProductList>,
}

impl AppState {
    /// Wires an accessor over `cache` and `source` with the given TTL.
    pub fn new(
        cache: MemoryCache<ProductList>,
        source: Arc<dyn CatalogSource>,
        ttl: Duration,
    ) -> Self {
        let products = ProductService::new(Arc::new(cache.clone()), source, ttl);
        Self {
            products: Arc::new(products),
            cache,
        }
    }

    /// Creates the production state: wall clock, built-in catalog, configured TTL.
    pub fn from_config(config: &Config) -> Self {
        let cache = MemoryCache::new(Arc::new(SystemClock));
        Self::new(cache, Arc::new(StaticCatalog), config.cache_ttl())
    }
}

/// Handler for GET /api/products
///
/// Returns the product list, served from cache when live.
pub async fn products_handler(State(state): State<AppState>) -> Json<ProductList> {
    Json(state.products.get_product_list().await)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(&stats, state.products.regenerations()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unknown routes.
pub async fn not_found_handler(uri: Uri) -> CatalogError {
    CatalogError::NotFound(uri.path().to_string())
}
