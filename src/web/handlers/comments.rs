//! Comment and reply submissions.

use axum::{
    Extension, Form,
    extract::{Path, State, rejection::FormRejection},
    http::Method,
    response::Redirect,
};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::Identity;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{CommentForm, ReplyForm};

/// Where every submission lands: the comment section of the article.
fn comment_anchor(article_id: i64) -> Redirect {
    Redirect::to(&format!("/view/{}#comment", article_id))
}

fn parse_id(raw: &str, what: &'static str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("{} not found", what), json!({ "id": raw })))
}

/// Posts a comment on an article.
///
/// # Endpoint
///
/// `GET|POST /pages/{id}/comment` (session with writer capability required)
///
/// A valid POST stores the comment with the current username as author.
/// GET requests and invalid forms redirect without storing anything.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the id is not an integer, or if a valid
/// POST targets a missing article.
pub async fn comment_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    method: Method,
    Path(article_id): Path<String>,
    form: Result<Form<CommentForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let article_id = parse_id(&article_id, "Article")?;

    if method != Method::POST {
        return Ok(comment_anchor(article_id));
    }

    let Ok(Form(form)) = form else {
        return Ok(comment_anchor(article_id));
    };
    if let Err(e) = form.validate() {
        tracing::debug!(article_id, "Comment rejected: {}", e);
        return Ok(comment_anchor(article_id));
    }

    state
        .comment_service
        .post_comment(&identity.username, article_id, &form.comment)
        .await?;

    Ok(comment_anchor(article_id))
}

/// Posts a reply to a comment.
///
/// # Endpoint
///
/// `GET|POST /pages/{id}/{comment_id}` (session with writer capability required)
///
/// Same contract as [`comment_handler`], storing a reply to `comment_id`.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if either id is not an integer, or if a
/// valid POST targets a missing comment or one that belongs to another article.
pub async fn reply_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    method: Method,
    Path((article_id, comment_id)): Path<(String, String)>,
    form: Result<Form<ReplyForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let article_id = parse_id(&article_id, "Article")?;
    let comment_id = parse_id(&comment_id, "Comment")?;

    if method != Method::POST {
        return Ok(comment_anchor(article_id));
    }

    let Ok(Form(form)) = form else {
        return Ok(comment_anchor(article_id));
    };
    if let Err(e) = form.validate() {
        tracing::debug!(article_id, "Reply rejected: {}", e);
        return Ok(comment_anchor(article_id));
    }

    state
        .comment_service
        .post_reply(&identity.username, article_id, comment_id, &form.reply)
        .await?;

    Ok(comment_anchor(article_id))
}
