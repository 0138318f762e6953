//! Absolute URLs of the current request, derived from its headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;
use url::Url;

/// Header set by reverse proxies carrying the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the root URL (`scheme://host/`) the client used to reach us.
///
/// The host comes from the `Host` header, port included. HTTP/2 clients send
/// `:authority` instead, which surfaces as the request URI's authority and is
/// used when `Host` is absent. The scheme is taken from `X-Forwarded-Proto`
/// when it names `http` or `https`, otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The host is not valid UTF-8 or not a valid authority
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "blog.example.com:8080".parse().unwrap());
///
/// let root = request_root(&headers, &Uri::from_static("/atom.xml")).unwrap();
/// assert_eq!(root.as_str(), "http://blog.example.com:8080/");
/// ```
pub fn request_root(headers: &HeaderMap, uri: &Uri) -> Result<Url, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?,
        None => uri
            .authority()
            .map(|authority| authority.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    let root = Url::parse(&format!("{}://{}/", scheme, host))
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({ "host": host })))?;

    // A host smuggling a path or credentials would not round-trip.
    if root.path() != "/" || !root.username().is_empty() || root.query().is_some() {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host }),
        ));
    }

    Ok(root)
}

/// Full URL of the current request: its root joined with the path and query.
pub fn request_url(root: &Url, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    root.join(path_and_query)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| root.to_string())
}
