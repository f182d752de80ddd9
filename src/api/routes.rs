//! API Routes
//!
//! Configures the Axum router with all catalog server endpoints.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    health_handler, not_found_handler, products_handler, stats_handler, AppState,
};

/// Path of the product list endpoint
pub const PRODUCTS_PATH: &str = "/api/products";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/products` - Product list (cached)
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: only `allowed_origins` may read responses cross-origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route(PRODUCTS_PATH, get(products_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds a CORS layer allowing exactly the given origins.
///
/// Origins are matched literally, so `localhost` and `127.0.0.1` must each be
/// listed. Entries that are not valid header values are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
