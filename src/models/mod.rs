//! Response models for the catalog server API
//!
//! DTOs serialized into the bodies of the supporting endpoints. The product
//! list itself is served straight from the catalog model.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
