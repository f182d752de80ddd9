//! Cache Service Module
//!
//! The injectable get / set-with-TTL interface handed to request handlers,
//! plus the shared in-memory implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, Clock};

// == Cache Service Trait ==
/// Expiring key/value cache used by cache-aside readers.
#[async_trait]
pub trait CacheService<V>: Send + Sync
where
    V: Send + Sync + 'static,
{
    /// Returns the live value for `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Option<V>;

    /// Like [`CacheService::get`], but leaves hit/miss statistics untouched.
    async fn peek(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key` with an absolute expiration `ttl` from now.
    async fn set_with_ttl(&self, key: &str, value: V, ttl: Duration);
}

// == Memory Cache ==
/// Process-wide cache backed by a `CacheStore` behind an async `RwLock`.
///
/// Cloning is cheap and every clone shares the same store.
#[derive(Debug)]
pub struct MemoryCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for MemoryCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> MemoryCache<V> {
    /// Creates an empty cache that reads time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(clock))),
        }
    }

    /// Shared handle to the underlying store, used by the cleanup task.
    pub fn store(&self) -> Arc<RwLock<CacheStore<V>>> {
        Arc::clone(&self.store)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}

#[async_trait]
impl<V> CacheService<V> for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V> {
        // Write lock: lookups update stats and drop expired entries
        self.store.write().await.get(key)
    }

    async fn peek(&self, key: &str) -> Option<V> {
        self.store.read().await.peek(key)
    }

    async fn set_with_ttl(&self, key: &str, value: V, ttl: Duration) {
        self.store.write().await.set_with_ttl(key, value, ttl);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    #[tokio::test]
    async fn test_memory_cache_get_and_set() {
        let clock = Arc::new(ManualClock::new(0));
        let cache: MemoryCache<u32> = MemoryCache::new(clock.clone());

        assert_eq!(cache.get("answer").await, None);

        cache.set_with_ttl("answer", 42, Duration::from_secs(60)).await;
        assert_eq!(cache.get("answer").await, Some(42));

        clock.advance(Duration::from_secs(60));
        assert_eq!(cache.get("answer").await, None);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache: MemoryCache<&'static str> = MemoryCache::new(Arc::new(ManualClock::new(0)));
        let other = cache.clone();

        cache.set_with_ttl("k", "v", Duration::from_secs(60)).await;
        assert_eq!(other.get("k").await, Some("v"));

        assert_eq!(other.peek("k").await, Some("v"));

        let stats = other.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let cache: Arc<dyn CacheService<String>> =
            Arc::new(MemoryCache::new(Arc::new(ManualClock::new(0))));

        cache
            .set_with_ttl("k", "v".to_string(), Duration::from_secs(1))
            .await;
        assert_eq!(cache.get("k").await.as_deref(), Some("v"));
    }
}
