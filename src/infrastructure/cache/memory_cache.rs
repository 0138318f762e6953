//! In-process page cache with LRU eviction and per-entry expiry.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;

use super::service::{CacheResult, CacheService, CachedPage};
use async_trait::async_trait;
use lru::LruCache;
use tokio::time::Instant;
use tracing::{debug, warn};

struct Entry {
    expires_at: Instant,
    page: CachedPage,
}

/// Page cache kept in the server process.
///
/// Used when Redis is not configured. Entries expire after their TTL and the
/// least recently used entry is evicted once `capacity` is reached.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Entry>>,
    default_ttl: Duration,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new(capacity: NonZeroUsize, default_ttl_seconds: u64) -> Self {
        debug!(capacity = capacity.get(), "Using in-memory page cache");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_page(&self, key: &str) -> CacheResult<Option<CachedPage>> {
        let Ok(mut entries) = self.entries.lock() else {
            warn!("Memory cache lock poisoned, treating {} as a miss", key);
            return Ok(None);
        };

        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                debug!("Cache HIT: {}", key);
                return Ok(Some(entry.page.clone()));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
            debug!("Cache EXPIRED: {}", key);
        } else {
            debug!("Cache MISS: {}", key);
        }

        Ok(None)
    }

    async fn set_page(
        &self,
        key: &str,
        page: &CachedPage,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let ttl = ttl_seconds
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);

        let Ok(mut entries) = self.entries.lock() else {
            warn!("Memory cache lock poisoned, not caching {}", key);
            return Ok(());
        };

        entries.put(
            key.to_string(),
            Entry {
                expires_at: Instant::now() + ttl,
                page: page.clone(),
            },
        );
        debug!("Cache SET: {} (TTL: {}s)", key, ttl.as_secs());

        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.entries.is_poisoned()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> CachedPage {
        CachedPage {
            status: 200,
            headers: vec![],
            body: body.as_bytes().to_vec(),
        }
    }

    fn cache(capacity: usize, ttl: u64) -> MemoryCache {
        MemoryCache::new(NonZeroUsize::new(capacity).unwrap(), ttl)
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl() {
        let cache = cache(8, 180);
        cache.set_page("view/", &page("a"), None).await.unwrap();

        tokio::time::advance(Duration::from_secs(179)).await;

        let hit = cache.get_page("view/").await.unwrap();
        assert_eq!(hit, Some(page("a")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_miss_after_ttl() {
        let cache = cache(8, 180);
        cache.set_page("view/", &page("a"), None).await.unwrap();

        tokio::time::advance(Duration::from_secs(181)).await;

        assert!(cache.get_page("view/").await.unwrap().is_none());
        assert_eq!(cache.entries.lock().unwrap().len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_ttl_overrides_default() {
        let cache = cache(8, 180);
        cache.set_page("view/", &page("a"), Some(5)).await.unwrap();

        tokio::time::advance(Duration::from_secs(6)).await;

        assert!(cache.get_page("view/").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = cache(2, 180);
        cache.set_page("a", &page("a"), None).await.unwrap();
        cache.set_page("b", &page("b"), None).await.unwrap();
        cache.set_page("c", &page("c"), None).await.unwrap();

        assert!(cache.get_page("a").await.unwrap().is_none());
        assert!(cache.get_page("b").await.unwrap().is_some());
        assert!(cache.get_page("c").await.unwrap().is_some());
    }
}
