//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Listings and the article page
//! - [`services::feed_service::FeedService`] - Atom feed of recent articles
//! - [`services::comment_service::CommentService`] - Comment and reply submissions
//! - [`services::auth_service::AuthService`] - Session cookie authentication

pub mod services;
