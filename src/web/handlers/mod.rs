//! HTTP handlers of the blog.

mod article;
mod comments;
mod feed;
mod health;
mod listing;

pub use article::{BlogPageTemplate, article_handler};
pub use comments::{comment_handler, reply_handler};
pub use feed::{ATOM_CONTENT_TYPE, feed_handler};
pub use health::health_handler;
pub use listing::{archives_handler, index_handler, segment_handler};
