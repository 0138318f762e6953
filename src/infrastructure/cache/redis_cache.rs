//! Redis-backed page cache.

use super::service::{CacheResult, CacheService, CachedPage};
use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::{debug, error, warn};

/// Redis page cache.
///
/// Pages are stored as JSON strings under `page:<key>` with `SET EX`.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Wraps an established connection.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set_page`] is called
    /// without a TTL; controlled via `PAGE_CACHE_TTL_SECONDS`.
    pub fn new(client: ConnectionManager, default_ttl_seconds: u64) -> Self {
        Self {
            client,
            default_ttl: default_ttl_seconds,
            key_prefix: "page:".to_string(),
        }
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_page(&self, key: &str) -> CacheResult<Option<CachedPage>> {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&redis_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<CachedPage>(&raw) {
                Ok(page) => {
                    debug!("Cache HIT: {}", key);
                    Ok(Some(page))
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set_page(
        &self,
        key: &str,
        page: &CachedPage,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let redis_key = self.build_key(key);
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        let raw = match serde_json::to_string(page) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode page {} for caching: {}", key, e);
                return Ok(());
            }
        };

        let mut conn = self.client.clone();
        match conn.set_ex::<_, _, ()>(&redis_key, raw, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
