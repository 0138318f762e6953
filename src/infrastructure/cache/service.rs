//! Page cache trait, cached page model and error types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use thiserror::Error;

/// Errors that can occur while talking to a key-value backend.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// A rendered response as stored in the page cache.
///
/// The body is base64-encoded when serialized so the Redis value stays valid JSON.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedPage {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    #[serde_as(as = "Base64")]
    pub body: Vec<u8>,
}

/// Trait for memoizing rendered pages per route and arguments.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures degrade to recomputing the page).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process LRU with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached page.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(page))` on cache hit
    /// - `Ok(None)` on cache miss, expiry or backend error (fail-open behavior)
    async fn get_page(&self, key: &str) -> CacheResult<Option<CachedPage>>;

    /// Stores a page with an optional TTL in seconds.
    ///
    /// `None` applies the implementation's default TTL. Implementations log
    /// errors and return `Ok(())` to avoid disrupting the request flow.
    async fn set_page(
        &self,
        key: &str,
        page: &CachedPage,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for the health report.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_page_json_encodes_body_as_base64() {
        let page = CachedPage {
            status: 200,
            headers: vec![("content-type".to_string(), "text/html".to_string())],
            body: b"<h1>hi</h1>".to_vec(),
        };

        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("PGgxPmhpPC9oMT4="));

        let decoded: CachedPage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, page);
    }

    #[test]
    fn test_cache_error_display() {
        let err = CacheError::ConnectionError("refused".to_string());
        assert_eq!(err.to_string(), "Cache connection error: refused");
    }
}
