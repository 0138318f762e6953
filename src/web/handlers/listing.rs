//! Paginated article listings: index, category, tag and archives.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::application::services::Listing;
use crate::domain::entities::Article;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path_segment::encode_segment;
use crate::web::extract::PageNumber;
use crate::web::flash::Flash;

/// Path prefix selecting a tag listing, e.g. `/tag=rust`.
const TAG_PREFIX: &str = "tag=";

/// One numbered link of the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: i64,
    pub current: bool,
}

/// Pagination state handed to `_pager.html`.
///
/// `base` is the listing's page route, already percent-encoded; links append
/// `?=<n>` to it.
#[derive(Debug, Clone)]
pub struct Pager {
    pub base: String,
    pub current: i64,
    pub pages: i64,
    pub links: Vec<PageLink>,
}

impl Pager {
    fn new(base: String, listing: &Listing) -> Self {
        let links = (1..=listing.pages)
            .map(|number| PageLink {
                number,
                current: number == listing.page,
            })
            .collect();

        Self {
            base,
            current: listing.page,
            pages: listing.pages,
            links,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub articles: Vec<Article>,
    pub all_tags: Vec<String>,
    pub pager: Pager,
    pub flash: Option<&'static str>,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog_category.html")]
pub struct BlogCategoryTemplate {
    pub articles: Vec<Article>,
    pub all_tags: Vec<String>,
    pub pager: Pager,
    pub flash: Option<&'static str>,
    pub category: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog_tag.html")]
pub struct BlogTagTemplate {
    pub articles: Vec<Article>,
    pub all_tags: Vec<String>,
    pub pager: Pager,
    pub flash: Option<&'static str>,
    pub tag: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog_archives.html")]
pub struct BlogArchivesTemplate {
    pub articles: Vec<Article>,
    pub all_tags: Vec<String>,
    pub pager: Pager,
    pub flash: Option<&'static str>,
}

/// Renders the newest articles, six per page.
///
/// # Endpoints
///
/// - `GET /`
/// - `GET /page?=<n>`
pub async fn index_handler(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    flash: Flash,
) -> Result<Response, AppError> {
    let listing = state.article_service.index(page).await?;
    let pager = Pager::new("/page".to_string(), &listing);

    Ok(flash.consume(BlogTemplate {
        articles: listing.articles,
        all_tags: listing.all_tags,
        pager,
        flash: flash.message(),
    }))
}

/// Renders a category or, for `tag=<name>` segments, a tag listing.
///
/// # Endpoints
///
/// - `GET /{category}` and `GET /{category}/page?=<n>`: 404 when the category
///   has no articles
/// - `GET /tag={tag}` and `GET /tag={tag}/page?=<n>`: empty listing for an
///   unknown tag
pub async fn segment_handler(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    PageNumber(page): PageNumber,
    flash: Flash,
) -> Result<Response, AppError> {
    if let Some(tag) = segment.strip_prefix(TAG_PREFIX) {
        let listing = state.article_service.tag(tag, page).await?;
        let pager = Pager::new(format!("/{}{}/page", TAG_PREFIX, encode_segment(tag)), &listing);

        return Ok(flash.consume(BlogTagTemplate {
            articles: listing.articles,
            all_tags: listing.all_tags,
            pager,
            flash: flash.message(),
            tag: tag.to_string(),
        }));
    }

    let listing = state.article_service.category(&segment, page).await?;
    let pager = Pager::new(format!("/{}/page", encode_segment(&segment)), &listing);

    Ok(flash.consume(BlogCategoryTemplate {
        articles: listing.articles,
        all_tags: listing.all_tags,
        pager,
        flash: flash.message(),
        category: segment,
    }))
}

/// Renders all articles, thirty per page.
///
/// # Endpoints
///
/// - `GET /archives`
/// - `GET /archives/page?=<n>`
pub async fn archives_handler(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    flash: Flash,
) -> Result<Response, AppError> {
    let listing = state.article_service.archives(page).await?;
    let pager = Pager::new("/archives/page".to_string(), &listing);

    Ok(flash.consume(BlogArchivesTemplate {
        articles: listing.articles,
        all_tags: listing.all_tags,
        pager,
        flash: flash.message(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(page: i64, pages: i64) -> Listing {
        Listing {
            articles: vec![],
            all_tags: vec![],
            pages,
            page,
        }
    }

    #[test]
    fn test_pager_marks_current_page() {
        let pager = Pager::new("/page".to_string(), &listing(2, 3));

        assert_eq!(pager.links.len(), 3);
        assert!(!pager.links[0].current);
        assert!(pager.links[1].current);
        assert_eq!(pager.links[2].number, 3);
    }

    #[test]
    fn test_pager_without_pages() {
        let pager = Pager::new("/page".to_string(), &listing(1, 0));
        assert!(pager.links.is_empty());
    }
}
