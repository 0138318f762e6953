//! Article entity.

use chrono::{DateTime, Utc};

/// A published blog article.
///
/// Articles are authored outside of this module; the blog only reads them.
/// The visit counter is kept in the view store, not on this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// Body as HTML.
    pub content: String,
    pub author: String,
    pub category: String,
    pub publish: DateTime<Utc>,
}

impl Article {
    /// Creates a new Article instance.
    pub fn new(
        id: i64,
        title: String,
        content: String,
        author: String,
        category: String,
        publish: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            category,
            publish,
        }
    }

    /// Path of the article page, e.g. `/view/42`.
    pub fn view_path(&self) -> String {
        format!("/view/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_creation() {
        let now = Utc::now();
        let article = Article::new(
            7,
            "Hello".to_string(),
            "<p>world</p>".to_string(),
            "jiang".to_string(),
            "rust".to_string(),
            now,
        );

        assert_eq!(article.id, 7);
        assert_eq!(article.category, "rust");
        assert_eq!(article.publish, now);
    }

    #[test]
    fn test_view_path() {
        let article = Article::new(
            42,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            Utc::now(),
        );
        assert_eq!(article.view_path(), "/view/42");
    }
}
