//! Blog route configuration.

use axum::{Router, middleware, routing::get};

use crate::state::AppState;
use crate::web::handlers::{
    archives_handler, article_handler, comment_handler, feed_handler, index_handler,
    reply_handler, segment_handler,
};
use crate::web::middleware::{response_cache, session, view_tracking};

/// Public pages.
///
/// Listings and the article page go through the page cache. The article page
/// counts the visit outside the cache so cached hits are counted as well. The
/// feed is never cached.
///
/// # Endpoints
///
/// - `GET /`, `GET /page?=<n>` - Newest articles
/// - `GET /archives`, `GET /archives/page?=<n>` - All articles, 30 per page
/// - `GET /{category}`, `GET /{category}/page?=<n>` - Category listing
/// - `GET /tag={tag}`, `GET /tag={tag}/page?=<n>` - Tag listing
/// - `GET /view/{id}` - Article page
/// - `GET /atom.xml` - Atom feed
pub fn public_routes(state: AppState) -> Router<AppState> {
    let cache = middleware::from_fn_with_state(state.clone(), response_cache::layer);
    let count_view = middleware::from_fn_with_state(state, view_tracking::layer);

    Router::new()
        .route("/", get(index_handler).layer(cache.clone()))
        .route("/page", get(index_handler).layer(cache.clone()))
        .route("/archives", get(archives_handler).layer(cache.clone()))
        .route("/archives/page", get(archives_handler).layer(cache.clone()))
        .route("/atom.xml", get(feed_handler))
        .route(
            "/view/{id}",
            get(article_handler).layer(cache.clone()).layer(count_view),
        )
        .route("/{segment}", get(segment_handler).layer(cache.clone()))
        .route("/{segment}/page", get(segment_handler).layer(cache))
}

/// Comment and reply submissions.
///
/// Protected by [`session::login_required`] and then
/// [`session::writer_required`].
///
/// # Endpoints
///
/// - `GET|POST /pages/{id}/comment` - New comment
/// - `GET|POST /pages/{id}/{comment_id}` - New reply
pub fn submission_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/pages/{id}/comment",
            get(comment_handler).post(comment_handler),
        )
        .route(
            "/pages/{id}/{comment_id}",
            get(reply_handler).post(reply_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::writer_required,
        ))
        .route_layer(middleware::from_fn_with_state(
            state,
            session::login_required,
        ))
}
