//! Comment and reply submissions.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment, NewReply, Reply};
use crate::domain::repositories::{ArticleRepository, CommentRepository};
use crate::error::AppError;

/// Service persisting reader comments and replies.
///
/// Records are stamped with the submission time and never updated afterwards.
pub struct CommentService {
    articles: Arc<dyn ArticleRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { articles, comments }
    }

    /// Stores a comment on an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub async fn post_comment(
        &self,
        author: &str,
        article_id: i64,
        content: &str,
    ) -> Result<Comment, AppError> {
        if !self.articles.exists(article_id).await? {
            return Err(AppError::not_found(
                "Article not found",
                json!({ "id": article_id }),
            ));
        }

        let comment = self
            .comments
            .create_comment(NewComment {
                author: author.to_string(),
                content: content.to_string(),
                article_id,
                publish: Utc::now(),
            })
            .await?;

        tracing::info!(comment_id = comment.id, article_id, author, "Comment posted");

        Ok(comment)
    }

    /// Stores a reply to a comment of an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist or belongs
    /// to a different article.
    pub async fn post_reply(
        &self,
        author: &str,
        article_id: i64,
        comment_id: i64,
        content: &str,
    ) -> Result<Reply, AppError> {
        let comment = self.comments.find_comment(comment_id).await?;

        match comment {
            Some(c) if c.article_id == article_id => {}
            _ => {
                return Err(AppError::not_found(
                    "Comment not found",
                    json!({ "article_id": article_id, "comment_id": comment_id }),
                ));
            }
        }

        let reply = self
            .comments
            .create_reply(NewReply {
                author: author.to_string(),
                content: content.to_string(),
                comment_id,
                publish: Utc::now(),
            })
            .await?;

        tracing::info!(reply_id = reply.id, comment_id, author, "Reply posted");

        Ok(reply)
    }
}
