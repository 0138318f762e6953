//! Atom feed generation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;
use std::sync::Arc;
use url::Url;

use crate::domain::entities::Article;
use crate::domain::pagination::FEED_SIZE;
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

pub const FEED_TITLE: &str = "Recent Articles";
pub const FEED_SUBTITLE: &str = "I like solitude, yearning for freedom";

/// Builds the Atom 1.0 document of the most recent articles.
pub struct FeedService {
    articles: Arc<dyn ArticleRepository>,
}

impl FeedService {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    /// Generates the feed for a request.
    ///
    /// `root` is the request's own root URL; entry links are resolved against it.
    /// `self_url` is the full URL the feed was requested from.
    pub async fn atom_feed(&self, root: &Url, self_url: &str) -> Result<String, AppError> {
        let articles = self.articles.latest(FEED_SIZE).await?;
        render_atom(&articles, root, self_url)
    }
}

/// Serializes articles into an Atom document.
///
/// Each entry uses the article's publish time for both `updated` and
/// `published`. The feed's own `updated` is the newest of those, or the
/// current time for an empty feed.
pub fn render_atom(articles: &[Article], root: &Url, self_url: &str) -> Result<String, AppError> {
    let updated = articles
        .iter()
        .map(|a| a.publish)
        .max()
        .unwrap_or_else(Utc::now);

    let mut entries = String::new();
    for article in articles {
        let link = root.join(&article.view_path()).map_err(|e| {
            AppError::internal(
                "Failed to build entry URL",
                json!({ "article": article.id, "error": e.to_string() }),
            )
        })?;
        let published = timestamp(article.publish);

        entries.push_str(&format!(
            "  <entry>\n    <title type=\"text\">{}</title>\n    <id>{}</id>\n    <updated>{}</updated>\n    <published>{}</published>\n    <link href=\"{}\"/>\n    <author>\n      <name>{}</name>\n    </author>\n    <content type=\"html\">{}</content>\n  </entry>\n",
            xml_escape(&article.title),
            xml_escape(link.as_str()),
            published,
            published,
            xml_escape(link.as_str()),
            xml_escape(&article.author),
            xml_escape(&article.content),
        ));
    }

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<feed xmlns=\"http://www.w3.org/2005/Atom\">\n  <title type=\"text\">{}</title>\n  <subtitle type=\"text\">{}</subtitle>\n  <id>{}</id>\n  <updated>{}</updated>\n  <link href=\"{}\"/>\n  <link href=\"{}\" rel=\"self\"/>\n  <generator>maple-blog</generator>\n{}</feed>\n",
        FEED_TITLE,
        FEED_SUBTITLE,
        xml_escape(root.as_str()),
        timestamp(updated),
        xml_escape(root.as_str()),
        xml_escape(self_url),
        entries
    ))
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
