//! Repository trait for comments and replies.

use crate::domain::entities::{Comment, CommentThread, NewComment, NewReply, Reply};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reader feedback.
///
/// Comments and replies are only ever inserted; this module never updates or
/// deletes them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persists a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Persists a new reply.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_reply(&self, new_reply: NewReply) -> Result<Reply, AppError>;

    /// Finds a comment by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_comment(&self, id: i64) -> Result<Option<Comment>, AppError>;

    /// All comments of an article with their replies, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn threads_for_article(&self, article_id: i64) -> Result<Vec<CommentThread>, AppError>;
}
