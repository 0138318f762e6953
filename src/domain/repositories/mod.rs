//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. They are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ArticleRepository`] - Article listings, lookups and counts
//! - [`TagRepository`] - Tag navigation and per-article tags
//! - [`CommentRepository`] - Comment and reply persistence
//! - [`SessionRepository`] - Session token resolution
//! - [`UserRepository`] - Account management for the admin CLI

pub mod article_repository;
pub mod comment_repository;
pub mod session_repository;
pub mod tag_repository;
pub mod user_repository;

pub use article_repository::{ArticleFilter, ArticleRepository};
pub use comment_repository::CommentRepository;
pub use session_repository::{Session, SessionRepository};
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
