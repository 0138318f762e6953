//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Comment, CommentThread, NewComment, NewReply, Reply};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// PostgreSQL repository for comments and replies.
///
/// Foreign keys on `comments.article_id` and `replies.comment_id` reject
/// dangling references; the violation maps to [`AppError::NotFound`].
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    author: String,
    content: String,
    article_id: i64,
    publish: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            author: r.author,
            content: r.content,
            article_id: r.article_id,
            publish: r.publish,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReplyRow {
    id: i64,
    author: String,
    content: String,
    comment_id: i64,
    publish: DateTime<Utc>,
}

impl From<ReplyRow> for Reply {
    fn from(r: ReplyRow) -> Self {
        Reply {
            id: r.id,
            author: r.author,
            content: r.content,
            comment_id: r.comment_id,
            publish: r.publish,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO comments (author, content, article_id, publish)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_comment.author)
        .bind(&new_comment.content)
        .bind(new_comment.article_id)
        .bind(new_comment.publish)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_comment.into_comment(id))
    }

    async fn create_reply(&self, new_reply: NewReply) -> Result<Reply, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO replies (author, content, comment_id, publish)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_reply.author)
        .bind(&new_reply.content)
        .bind(new_reply.comment_id)
        .bind(new_reply.publish)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_reply.into_reply(id))
    }

    async fn find_comment(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, author, content, article_id, publish
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn threads_for_article(&self, article_id: i64) -> Result<Vec<CommentThread>, AppError> {
        let comments = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, author, content, article_id, publish
            FROM comments
            WHERE article_id = $1
            ORDER BY publish, id
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = comments.iter().map(|c| c.id).collect();

        let replies = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT id, author, content, comment_id, publish
            FROM replies
            WHERE comment_id = ANY($1)
            ORDER BY publish, id
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_comment: HashMap<i64, Vec<Reply>> = HashMap::new();
        for reply in replies {
            by_comment
                .entry(reply.comment_id)
                .or_default()
                .push(reply.into());
        }

        Ok(comments
            .into_iter()
            .map(|row| {
                let replies = by_comment.remove(&row.id).unwrap_or_default();
                CommentThread {
                    comment: row.into(),
                    replies,
                }
            })
            .collect())
    }
}
