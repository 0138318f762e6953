//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters for every query.
//!
//! # Repositories
//!
//! - [`PgArticleRepository`] - Article listings and lookups
//! - [`PgTagRepository`] - Tag navigation
//! - [`PgCommentRepository`] - Comment and reply persistence
//! - [`PgSessionRepository`] - Session token storage and resolution
//! - [`PgUserRepository`] - Account management

pub mod pg_article_repository;
pub mod pg_comment_repository;
pub mod pg_session_repository;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
