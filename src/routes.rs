//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - Blog pages, feed and submissions (see [`crate::web::routes`])
//! - `GET  /health`      - Health check: database, page cache, view store
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on submissions
//! - **Authentication** - Cookie session on submissions
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use crate::web::middleware::{rate_limit, tracing};
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the blog router without rate limiting.
///
/// Does not need `ConnectInfo`, so it can be driven directly by in-process
/// test clients.
pub fn blog_router(state: AppState) -> Router {
    let submissions = web::routes::submission_routes(state.clone());
    assemble(state, submissions)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let submissions = web::routes::submission_routes(state.clone());
    let submissions = if behind_proxy {
        submissions.layer(rate_limit::proxy_layer())
    } else {
        submissions.layer(rate_limit::peer_layer())
    };

    NormalizePathLayer::trim_trailing_slash().layer(assemble(state, submissions))
}

fn assemble(state: AppState, submissions: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(web::routes::public_routes(state.clone()))
        .merge(submissions)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}
