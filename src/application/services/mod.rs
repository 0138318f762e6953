//! Business logic services for the application layer.

pub mod article_service;
pub mod auth_service;
pub mod comment_service;
pub mod feed_service;

pub use article_service::{ArticlePage, ArticleService, Listing};
pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use feed_service::FeedService;
