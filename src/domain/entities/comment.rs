//! Comment and reply entities.

use chrono::{DateTime, Utc};

/// A reader comment on an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub article_id: i64,
    pub publish: DateTime<Utc>,
}

/// A reply to a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub comment_id: i64,
    pub publish: DateTime<Utc>,
}

/// A comment together with its replies, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Reply>,
}

/// Input data for persisting a new comment.
///
/// `article_id` must reference an existing article.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub author: String,
    pub content: String,
    pub article_id: i64,
    pub publish: DateTime<Utc>,
}

/// Input data for persisting a new reply.
///
/// `comment_id` must reference an existing comment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReply {
    pub author: String,
    pub content: String,
    pub comment_id: i64,
    pub publish: DateTime<Utc>,
}

impl NewComment {
    /// Materializes the record once the database has assigned an id.
    pub fn into_comment(self, id: i64) -> Comment {
        Comment {
            id,
            author: self.author,
            content: self.content,
            article_id: self.article_id,
            publish: self.publish,
        }
    }
}

impl NewReply {
    /// Materializes the record once the database has assigned an id.
    pub fn into_reply(self, id: i64) -> Reply {
        Reply {
            id,
            author: self.author,
            content: self.content,
            comment_id: self.comment_id,
            publish: self.publish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_keeps_fields() {
        let now = Utc::now();
        let comment = NewComment {
            author: "alice".to_string(),
            content: "nice post".to_string(),
            article_id: 3,
            publish: now,
        }
        .into_comment(11);

        assert_eq!(comment.id, 11);
        assert_eq!(comment.article_id, 3);
        assert_eq!(comment.author, "alice");
        assert_eq!(comment.publish, now);
    }

    #[test]
    fn test_new_reply_keeps_fields() {
        let reply = NewReply {
            author: "bob".to_string(),
            content: "agreed".to_string(),
            comment_id: 11,
            publish: Utc::now(),
        }
        .into_reply(5);

        assert_eq!(reply.id, 5);
        assert_eq!(reply.comment_id, 11);
        assert_eq!(reply.content, "agreed");
    }
}
