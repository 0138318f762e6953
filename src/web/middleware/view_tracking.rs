//! Visit counting for the article page.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Adds one visit to the requested article before the page is served.
///
/// Layered outside the response cache so that cached hits are counted too.
/// The article does not have to exist. Counter failures are logged and never
/// fail the request.
pub async fn layer(
    State(st): State<AppState>,
    Path(id): Path<String>,
    req: Request,
    next: Next,
) -> Response {
    if let Ok(article_id) = id.parse::<i64>() {
        match st.view_counter.record_view(article_id).await {
            Ok(views) => tracing::debug!(article_id, views, "Recorded article view"),
            Err(e) => tracing::warn!(article_id, "Failed to record view: {}", e),
        }
    }

    next.run(req).await
}
