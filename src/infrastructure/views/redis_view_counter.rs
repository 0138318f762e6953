//! Redis sorted-set view counter.

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::{debug, warn};

use super::service::{VISITED_ARTICLES_KEY, ViewCounter, article_member, parse_article_member};
use crate::infrastructure::cache::{CacheError, CacheResult};

/// View counter backed by `ZINCRBY visited:article 1 article:<id>`.
///
/// The increment is atomic on the Redis side; no client coordination is needed.
pub struct RedisViewCounter {
    client: ConnectionManager,
}

impl RedisViewCounter {
    pub fn new(client: ConnectionManager) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ViewCounter for RedisViewCounter {
    async fn record_view(&self, article_id: i64) -> CacheResult<u64> {
        let mut conn = self.client.clone();

        let score: f64 = conn
            .zincr(VISITED_ARTICLES_KEY, article_member(article_id), 1)
            .await
            .map_err(|e| CacheError::OperationError(format!("ZINCRBY failed: {}", e)))?;

        debug!(article_id, views = score, "Recorded article view");
        Ok(score as u64)
    }

    async fn views(&self, article_id: i64) -> CacheResult<Option<u64>> {
        let mut conn = self.client.clone();

        let score: Option<f64> = conn
            .zscore(VISITED_ARTICLES_KEY, article_member(article_id))
            .await
            .map_err(|e| CacheError::OperationError(format!("ZSCORE failed: {}", e)))?;

        Ok(score.map(|s| s as u64))
    }

    async fn top(&self, limit: usize) -> CacheResult<Vec<(i64, u64)>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.client.clone();
        let stop = isize::try_from(limit - 1).unwrap_or(isize::MAX);

        let members: Vec<(String, f64)> = conn
            .zrevrange_withscores(VISITED_ARTICLES_KEY, 0, stop)
            .await
            .map_err(|e| CacheError::OperationError(format!("ZREVRANGE failed: {}", e)))?;

        Ok(members
            .into_iter()
            .filter_map(|(member, score)| match parse_article_member(&member) {
                Some(id) => Some((id, score as u64)),
                None => {
                    warn!("Ignoring foreign member {} in {}", member, VISITED_ARTICLES_KEY);
                    None
                }
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
