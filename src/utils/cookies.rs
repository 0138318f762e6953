//! Cookie header parsing and `Set-Cookie` construction.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

/// Returns the value of the named cookie, if the request carries it.
///
/// Handles several `Cookie` headers as well as several cookies per header,
/// split on semicolons. The first match wins.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name => Some(value.to_string()),
                _ => None,
            }
        })
}

/// Builds a `Set-Cookie` value scoped to the whole site.
///
/// `max_age` of `Some(0)` deletes the cookie in the browser.
pub fn build_cookie(
    name: &str,
    value: &str,
    max_age: Option<u64>,
    secure: bool,
) -> Option<HeaderValue> {
    let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, value);
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={}", max_age));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).ok()
}
