//! View counter trait and sorted-set key layout.

use async_trait::async_trait;

use crate::infrastructure::cache::CacheResult;

/// Sorted set holding one member per visited article, scored by visit count.
pub const VISITED_ARTICLES_KEY: &str = "visited:article";

/// Sorted-set member for an article, e.g. `article:42`.
pub fn article_member(article_id: i64) -> String {
    format!("article:{}", article_id)
}

/// Parses a member written by [`article_member`] back into an article id.
pub fn parse_article_member(member: &str) -> Option<i64> {
    member.strip_prefix("article:")?.parse().ok()
}

/// Tracks how often each article page is requested.
///
/// Counts only ever grow: the sole write is an increment by one.
///
/// # Implementations
///
/// - [`crate::infrastructure::views::RedisViewCounter`] - `ZINCRBY` on a Redis sorted set
/// - [`crate::infrastructure::views::NullViewCounter`] - Drops every visit
#[async_trait]
pub trait ViewCounter: Send + Sync {
    /// Adds one visit to an article and returns its new count.
    ///
    /// The article does not have to exist.
    async fn record_view(&self, article_id: i64) -> CacheResult<u64>;

    /// Current visit count of an article, `None` if never visited.
    async fn views(&self, article_id: i64) -> CacheResult<Option<u64>>;

    /// Most visited articles, highest count first.
    async fn top(&self, limit: usize) -> CacheResult<Vec<(i64, u64)>>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_member_format() {
        assert_eq!(article_member(42), "article:42");
    }

    #[test]
    fn test_parse_article_member() {
        assert_eq!(parse_article_member("article:42"), Some(42));
        assert_eq!(parse_article_member("article:"), None);
        assert_eq!(parse_article_member("post:42"), None);
    }
}
