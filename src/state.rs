//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ArticleService, AuthService, CommentService, FeedService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::views::ViewCounter;

/// Settings the web layer reads per request.
#[derive(Debug, Clone)]
pub struct WebSettings {
    /// Lifetime of cached pages in seconds.
    pub page_cache_ttl: u64,
    /// Where unauthenticated submissions are sent; `?next=<path>` is appended.
    pub login_url: String,
    /// Adds `Secure` to cookies set by the blog.
    pub secure_cookies: bool,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            page_cache_ttl: 180,
            login_url: "/login".to_string(),
            secure_cookies: false,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
    pub feed_service: Arc<FeedService>,
    pub comment_service: Arc<CommentService>,
    pub auth_service: Arc<AuthService>,
    pub cache: Arc<dyn CacheService>,
    pub view_counter: Arc<dyn ViewCounter>,
    pub settings: Arc<WebSettings>,
}

impl AppState {
    pub fn new(
        article_service: Arc<ArticleService>,
        feed_service: Arc<FeedService>,
        comment_service: Arc<CommentService>,
        auth_service: Arc<AuthService>,
        cache: Arc<dyn CacheService>,
        view_counter: Arc<dyn ViewCounter>,
        settings: WebSettings,
    ) -> Self {
        Self {
            article_service,
            feed_service,
            comment_service,
            auth_service,
            cache,
            view_counter,
            settings: Arc::new(settings),
        }
    }
}
