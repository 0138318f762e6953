//! Article view tracking.
//!
//! - [`RedisViewCounter`] - Redis sorted set `visited:article`
//! - [`NullViewCounter`] - No-op when Redis is not configured

mod null_view_counter;
mod redis_view_counter;
mod service;

pub use null_view_counter::NullViewCounter;
pub use redis_view_counter::RedisViewCounter;
pub use service::{VISITED_ARTICLES_KEY, ViewCounter, article_member, parse_article_member};
