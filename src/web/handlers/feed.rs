//! Atom feed endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, Uri, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_root::{request_root, request_url};

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";

/// Serves the Atom feed of the 15 most recent articles.
///
/// Entry links are absolute, resolved against the root URL the client used.
///
/// # Endpoint
///
/// `GET /atom.xml`
pub async fn feed_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let root = request_root(&headers, &uri)?;
    let self_url = request_url(&root, &uri);

    let body = state.feed_service.atom_feed(&root, &self_url).await?;

    Ok(([(header::CONTENT_TYPE, ATOM_CONTENT_TYPE)], body).into_response())
}
