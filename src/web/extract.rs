//! Request extractors shared by the listing handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::json;

use crate::domain::pagination::MAX_PAGE;
use crate::error::AppError;

/// The 1-based page number of a listing request.
///
/// Read from the query string in either the legacy `?=<n>` form or as
/// `?page=<n>`. Absent means page 1. Anything that is not an integer between 1
/// and [`MAX_PAGE`] is rejected with 404, so malformed page URLs behave like
/// missing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for PageNumber {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_page_query(parts.uri.query()).map(PageNumber)
    }
}

/// Parses the page number out of a raw query string.
pub fn parse_page_query(query: Option<&str>) -> Result<i64, AppError> {
    let Some(raw) = query
        .unwrap_or_default()
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some(("", value)) | Some(("page", value)) => Some(value),
            _ => None,
        })
    else {
        return Ok(1);
    };

    match raw.parse::<i64>() {
        Ok(n) if (1..=MAX_PAGE).contains(&n) => Ok(n),
        _ => Err(AppError::not_found(
            "Page not found",
            json!({ "page": raw }),
        )),
    }
}
