//! Cache Module
//!
//! Provides in-memory caching with absolute TTL expiration.

mod clock;
mod entry;
mod service;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use service::{CacheService, MemoryCache};
pub use stats::CacheStats;
pub use store::CacheStore;
