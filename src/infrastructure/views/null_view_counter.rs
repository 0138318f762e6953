//! No-op view counter for deployments without Redis.

use async_trait::async_trait;
use tracing::debug;

use super::service::ViewCounter;
use crate::infrastructure::cache::CacheResult;

/// A view counter that records nothing.
pub struct NullViewCounter;

impl NullViewCounter {
    pub fn new() -> Self {
        debug!("Using NullViewCounter (view tracking disabled)");
        Self
    }
}

impl Default for NullViewCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewCounter for NullViewCounter {
    async fn record_view(&self, _article_id: i64) -> CacheResult<u64> {
        Ok(0)
    }

    async fn views(&self, _article_id: i64) -> CacheResult<Option<u64>> {
        Ok(None)
    }

    async fn top(&self, _limit: usize) -> CacheResult<Vec<(i64, u64)>> {
        Ok(Vec::new())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
