//! Cache Store Module
//!
//! HashMap storage with absolute TTL expiration driven by an injected clock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock};

// == Cache Store ==
/// Expiring key/value storage.
///
/// Expired entries are treated as absent on lookup and removed lazily, or in
/// bulk by [`CacheStore::cleanup_expired`].
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
    /// Time source for stamping and expiring entries
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store that reads time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Overwriting a key replaces its value and restarts its expiration
    /// window from the current time. Last writer wins.
    pub fn set_with_ttl(&mut self, key: &str, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);
        self.entries.insert(key.to_string(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the live value stored under `key`.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Returns a clone of the live value under `key` without recording a hit
    /// or miss and without dropping an expired entry.
    pub fn peek(&self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    const TTL: Duration = Duration::from_secs(600);

    fn store_with_clock() -> (CacheStore<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        (CacheStore::new(clock.clone()), clock)
    }

    #[test]
    fn test_store_new() {
        let (store, _) = store_with_clock();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let (mut store, _) = store_with_clock();

        store.set_with_ttl("key1", "value1".to_string(), TTL);
        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let (mut store, _) = store_with_clock();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite_restarts_window() {
        let (mut store, clock) = store_with_clock();

        store.set_with_ttl("key1", "value1".to_string(), TTL);
        clock.advance(Duration::from_secs(500));
        store.set_with_ttl("key1", "value2".to_string(), TTL);
        clock.advance(Duration::from_secs(500));

        assert_eq!(store.get("key1").as_deref(), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let (mut store, clock) = store_with_clock();

        store.set_with_ttl("key1", "value1".to_string(), TTL);
        assert!(store.get("key1").is_some());

        clock.advance(Duration::from_secs(11 * 60));

        assert!(store.get("key1").is_none());
        assert!(store.is_empty(), "Expired entry should be dropped on lookup");
    }

    #[test]
    fn test_store_reads_do_not_extend_expiry() {
        let (mut store, clock) = store_with_clock();

        store.set_with_ttl("key1", "value1".to_string(), TTL);
        for _ in 0..9 {
            clock.advance(Duration::from_secs(60));
            assert!(store.get("key1").is_some());
        }

        clock.advance(Duration::from_secs(60));
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_stats() {
        let (mut store, _) = store_with_clock();

        store.set_with_ttl("key1", "value1".to_string(), TTL);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let (mut store, clock) = store_with_clock();

        store.set_with_ttl("key1", "value1".to_string(), Duration::from_secs(1));
        store.set_with_ttl("key2", "value2".to_string(), Duration::from_secs(10));

        clock.advance(Duration::from_secs(2));

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("key2").is_some());
    }

    #[test]
    fn test_store_peek_leaves_stats_alone() {
        let (mut store, clock) = store_with_clock();

        assert!(store.peek("key1").is_none());
        store.set_with_ttl("key1", "value1".to_string(), TTL);
        assert_eq!(store.peek("key1").as_deref(), Some("value1"));

        clock.advance(TTL);
        assert!(store.peek("key1").is_none());

        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.total_entries, 1, "Peek should not drop expired entries");
    }
}
