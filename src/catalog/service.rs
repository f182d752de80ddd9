//! Cache-aside accessor for the product list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::model::ProductList;
use super::source::CatalogSource;
use crate::cache::CacheService;

/// The single cache slot the product list lives in.
pub const PRODUCT_LIST_KEY: &str = "productList";

/// Absolute lifetime of a cached product list.
pub const DEFAULT_PRODUCT_TTL: Duration = Duration::from_secs(10 * 60);

/// Serves the product list from cache, regenerating it from the catalog
/// source when the cached copy is absent or expired.
///
/// Regeneration is single-flight: concurrent misses wait on one another and
/// re-check the cache, so the source runs at most once per expiry window.
pub struct ProductService {
    cache: Arc<dyn CacheService<ProductList>>,
    source: Arc<dyn CatalogSource>,
    ttl: Duration,
    refill: Mutex<()>,
    regenerations: AtomicU64,
}

impl ProductService {
    pub fn new(
        cache: Arc<dyn CacheService<ProductList>>,
        source: Arc<dyn CatalogSource>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            source,
            ttl,
            refill: Mutex::new(()),
            regenerations: AtomicU64::new(0),
        }
    }

    /// Returns the cached product list, regenerating it on a miss.
    pub async fn get_product_list(&self) -> ProductList {
        if let Some(products) = self.cache.get(PRODUCT_LIST_KEY).await {
            debug!("Product list served from cache");
            return products;
        }

        let _guard = self.refill.lock().await;

        // Another request may have refilled the slot while we waited
        if let Some(products) = self.cache.peek(PRODUCT_LIST_KEY).await {
            debug!("Product list refilled by a concurrent request");
            return products;
        }

        let products: ProductList = self.source.generate().into();
        self.cache
            .set_with_ttl(PRODUCT_LIST_KEY, Arc::clone(&products), self.ttl)
            .await;

        let count = self.regenerations.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            "Product list regenerated ({} products, ttl={}s, regeneration #{})",
            products.len(),
            self.ttl.as_secs(),
            count
        );

        products
    }

    /// Number of times the product list has been regenerated.
    pub fn regenerations(&self) -> u64 {
        self.regenerations.load(Ordering::Relaxed)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
