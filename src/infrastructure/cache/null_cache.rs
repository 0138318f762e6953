//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService, CachedPage};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when page caching is explicitly disabled. Every lookup is a miss and
/// every write is dropped.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (page caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_page(&self, _key: &str) -> CacheResult<Option<CachedPage>> {
        Ok(None)
    }

    async fn set_page(
        &self,
        _key: &str,
        _page: &CachedPage,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
