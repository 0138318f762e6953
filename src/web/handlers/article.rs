//! The single-article page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use serde_json::json;

use crate::application::services::ArticlePage;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{CommentForm, MAX_MESSAGE_LENGTH, ReplyForm};

#[derive(Template, WebTemplate)]
#[template(path = "blog_page.html")]
pub struct BlogPageTemplate {
    pub page: ArticlePage,
    pub views: u64,
    pub comment_form: CommentForm,
    pub reply_form: ReplyForm,
    pub max_length: u64,
}

/// Renders an article with its tags, comments and visit count.
///
/// The visit itself is recorded by
/// [`crate::web::middleware::view_tracking`] before this handler runs. A view
/// store failure renders the page with a count of zero.
///
/// # Endpoint
///
/// `GET /view/{id}`
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the id is not an integer or the article
/// does not exist.
pub async fn article_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<BlogPageTemplate, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::not_found("Article not found", json!({ "id": id })))?;

    let page = state.article_service.article_page(id).await?;

    let views = match state.view_counter.views(id).await {
        Ok(views) => views.unwrap_or(0),
        Err(e) => {
            tracing::warn!(article_id = id, "Failed to read view count: {}", e);
            0
        }
    };

    Ok(BlogPageTemplate {
        page,
        views,
        comment_form: CommentForm::default(),
        reply_form: ReplyForm::default(),
        max_length: MAX_MESSAGE_LENGTH,
    })
}
