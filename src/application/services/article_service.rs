//! Article listings and the single-article page.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Article, CommentThread, Tag};
use crate::domain::pagination::{ARCHIVE_PER_PAGE, ARTICLES_PER_PAGE, PageRequest, page_count};
use crate::domain::repositories::{
    ArticleFilter, ArticleRepository, CommentRepository, TagRepository,
};
use crate::error::AppError;

/// One rendered page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub articles: Vec<Article>,
    /// Distinct tag names for the navigation sidebar.
    pub all_tags: Vec<String>,
    /// Total number of pages for the filter.
    pub pages: i64,
    /// Current 1-based page number.
    pub page: i64,
}

/// Everything the article page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePage {
    pub article: Article,
    pub all_tags: Vec<String>,
    /// Tags attached to this article.
    pub tags: Vec<Tag>,
    pub threads: Vec<CommentThread>,
}

/// Service reading articles for the public listings.
///
/// Pages past the last one render an empty listing rather than failing.
pub struct ArticleService {
    articles: Arc<dyn ArticleRepository>,
    tags: Arc<dyn TagRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl ArticleService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        tags: Arc<dyn TagRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            articles,
            tags,
            comments,
        }
    }

    /// Newest articles, six per page.
    pub async fn index(&self, page: i64) -> Result<Listing, AppError> {
        self.listing(ArticleFilter::All, PageRequest::new(page, ARTICLES_PER_PAGE))
            .await
    }

    /// Articles of one category, six per page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category has no articles.
    pub async fn category(&self, category: &str, page: i64) -> Result<Listing, AppError> {
        let filter = ArticleFilter::Category(category.to_string());

        let total = self.articles.count(&filter).await?;
        if total == 0 {
            return Err(AppError::not_found(
                "Category not found",
                json!({ "category": category }),
            ));
        }

        let request = PageRequest::new(page, ARTICLES_PER_PAGE);
        let articles = self.articles.list(&filter, request).await?;
        let all_tags = self.tags.distinct_names().await?;

        Ok(Listing {
            articles,
            all_tags,
            pages: page_count(total, request.size),
            page: request.number,
        })
    }

    /// Articles carrying a tag, six per page. An unknown tag yields an empty listing.
    pub async fn tag(&self, tag: &str, page: i64) -> Result<Listing, AppError> {
        self.listing(
            ArticleFilter::Tag(tag.to_string()),
            PageRequest::new(page, ARTICLES_PER_PAGE),
        )
        .await
    }

    /// All articles, thirty per page.
    pub async fn archives(&self, page: i64) -> Result<Listing, AppError> {
        self.listing(ArticleFilter::All, PageRequest::new(page, ARCHIVE_PER_PAGE))
            .await
    }

    async fn listing(
        &self,
        filter: ArticleFilter,
        request: PageRequest,
    ) -> Result<Listing, AppError> {
        let articles = self.articles.list(&filter, request).await?;
        let all_tags = self.tags.distinct_names().await?;
        let total = self.articles.count(&filter).await?;

        Ok(Listing {
            articles,
            all_tags,
            pages: page_count(total, request.size),
            page: request.number,
        })
    }

    /// Total number of articles.
    pub async fn total(&self) -> Result<i64, AppError> {
        self.articles.count(&ArticleFilter::All).await
    }

    /// Loads an article with its tags and comment threads.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub async fn article_page(&self, id: i64) -> Result<ArticlePage, AppError> {
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found", json!({ "id": id })))?;

        let all_tags = self.tags.distinct_names().await?;
        let tags = self.tags.for_article(id).await?;
        let threads = self.comments.threads_for_article(id).await?;

        Ok(ArticlePage {
            article,
            all_tags,
            tags,
            threads,
        })
    }
}
