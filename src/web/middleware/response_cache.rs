//! Page cache middleware for the public GET routes.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::infrastructure::cache::CachedPage;
use crate::state::AppState;
use crate::utils::cookies::cookie_value;
use crate::web::flash::FLASH_COOKIE;

/// Largest body the cache will buffer and store.
const MAX_CACHED_BODY: usize = 4 * 1024 * 1024;

/// Headers replayed from a cached page. `Set-Cookie` is never stored.
const REPLAYED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::CONTENT_LANGUAGE];

/// Cache key of a request: `view/<path>` plus `?<query>` when present.
///
/// The path keeps no leading slash, so `/page?=2` maps to `view/page?=2` and
/// the index `/` to `view/`.
pub fn cache_key(uri: &Uri) -> String {
    let path = uri.path().trim_start_matches('/');
    match uri.query() {
        Some(query) => format!("view/{}?{}", path, query),
        None => format!("view/{}", path),
    }
}

/// Serves GET requests from the page cache and stores fresh 200 responses.
///
/// Requests carrying a flash cookie bypass the cache in both directions, so a
/// one-shot notice is neither replayed to other visitors nor hidden by a hit.
/// Backend errors count as misses.
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    if req.method() != Method::GET || cookie_value(req.headers(), FLASH_COOKIE).is_some() {
        return next.run(req).await;
    }

    let key = cache_key(req.uri());

    match st.cache.get_page(&key).await {
        Ok(Some(page)) => {
            metrics::counter!("maple_page_cache_hit_total").increment(1);
            tracing::debug!(key = %key, "Page cache hit");
            return build_response(page);
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(key = %key, "Page cache lookup failed: {}", e),
    }

    metrics::counter!("maple_page_cache_miss_total").increment(1);

    let response = next.run(req).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_CACHED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(key = %key, "Failed to buffer response body: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let page = CachedPage {
        status: parts.status.as_u16(),
        headers: REPLAYED_HEADERS
            .iter()
            .filter_map(|name| {
                let value = parts.headers.get(name)?.to_str().ok()?;
                Some((name.to_string(), value.to_string()))
            })
            .collect(),
        body: bytes.to_vec(),
    };

    if let Err(e) = st
        .cache
        .set_page(&key, &page, Some(st.settings.page_cache_ttl))
        .await
    {
        tracing::warn!(key = %key, "Failed to store page: {}", e);
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn build_response(page: CachedPage) -> Response {
    let mut builder = Response::builder().status(page.status);

    for (name, value) in page.headers {
        if let Ok(header_value) = HeaderValue::from_str(&value) {
            builder = builder.header(name, header_value);
        }
    }

    builder
        .body(Body::from(page.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
