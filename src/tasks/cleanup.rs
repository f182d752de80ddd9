//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries. Lookups
//! already ignore expired entries; this only reclaims their memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task sleeps for `cleanup_interval_secs` between runs and takes the
/// store's write lock only while sweeping.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn shared_store(clock: Arc<ManualClock>) -> Arc<RwLock<CacheStore<String>>> {
        Arc::new(RwLock::new(CacheStore::new(clock)))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let clock = Arc::new(ManualClock::new(0));
        let cache = shared_store(clock.clone());

        cache
            .write()
            .await
            .set_with_ttl("expire_soon", "value".to_string(), Duration::from_secs(1));
        clock.advance(Duration::from_secs(2));

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for one sweep
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(cache.read().await.is_empty(), "Expired entry should have been cleaned up");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let clock = Arc::new(ManualClock::new(0));
        let cache = shared_store(clock);

        cache
            .write()
            .await
            .set_with_ttl("long_lived", "value".to_string(), Duration::from_secs(3600));

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.write().await.get("long_lived").as_deref(),
            Some("value"),
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = shared_store(Arc::new(ManualClock::new(0)));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
