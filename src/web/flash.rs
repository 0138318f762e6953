//! One-shot notices carried across a redirect, localized per request.
//!
//! The `flash` cookie holds a notice code, not text. The message is translated
//! when the next listing renders, using the request's `Accept-Language`.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
    response::{IntoResponse, Response},
};
use std::convert::Infallible;

use crate::utils::cookies::{build_cookie, cookie_value};

pub const FLASH_COOKIE: &str = "flash";

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Negotiates the locale from `Accept-Language`.
    ///
    /// Language ranges are tried by descending quality; the first `zh*` or
    /// `en*` range decides. Anything else falls back to English.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(accept) = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
        else {
            return Locale::default();
        };

        let mut ranges: Vec<(String, f32)> = accept
            .split(',')
            .filter_map(|item| {
                let mut parts = item.trim().split(';');
                let tag = parts.next()?.trim().to_ascii_lowercase();
                if tag.is_empty() {
                    return None;
                }
                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((tag, quality))
            })
            .filter(|(_, q)| *q > 0.0)
            .collect();

        // Stable sort keeps header order among equal weights.
        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges
            .iter()
            .find_map(|(tag, _)| {
                let primary = tag.split('-').next().unwrap_or(tag);
                match primary {
                    "zh" => Some(Locale::Zh),
                    "en" => Some(Locale::En),
                    _ => None,
                }
            })
            .unwrap_or_default()
    }
}

/// A notice shown once on the next page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The account lacks the writer capability.
    Unconfirmed,
    /// A protected route was requested without a session.
    LoginRequired,
}

impl Notice {
    pub fn code(&self) -> &'static str {
        match self {
            Notice::Unconfirmed => "unconfirmed",
            Notice::LoginRequired => "login_required",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "unconfirmed" => Some(Notice::Unconfirmed),
            "login_required" => Some(Notice::LoginRequired),
            _ => None,
        }
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Notice::Unconfirmed, Locale::En) => "You have not confirm your account",
            (Notice::Unconfirmed, Locale::Zh) => "你还没有验证你的账户",
            (Notice::LoginRequired, Locale::En) => "Please log in to access this page.",
            (Notice::LoginRequired, Locale::Zh) => "请登录后访问此页面",
        }
    }

    /// `Set-Cookie` value storing this notice.
    pub fn cookie(&self, secure: bool) -> Option<header::HeaderValue> {
        build_cookie(FLASH_COOKIE, self.code(), None, secure)
    }
}

/// The pending notice of the current request, if any.
///
/// Rendering through [`Flash::consume`] clears the cookie so the notice shows once.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    notice: Option<Notice>,
    present: bool,
    locale: Locale,
}

impl Flash {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let raw = cookie_value(headers, FLASH_COOKIE);
        Self {
            notice: raw.as_deref().and_then(Notice::from_code),
            present: raw.is_some(),
            locale: Locale::from_headers(headers),
        }
    }

    /// Localized message to display.
    pub fn message(&self) -> Option<&'static str> {
        self.notice.map(|n| n.message(self.locale))
    }

    /// Renders `page`, deleting the flash cookie when one was sent.
    pub fn consume(self, page: impl IntoResponse) -> Response {
        let mut response = page.into_response();
        if self.present
            && let Some(clear) = build_cookie(FLASH_COOKIE, "", Some(0), false)
        {
            response.headers_mut().append(header::SET_COOKIE, clear);
        }
        response
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_locale_defaults_to_english() {
        assert_eq!(Locale::from_headers(&HeaderMap::new()), Locale::En);
        assert_eq!(Locale::from_headers(&accept("fr-FR, de")), Locale::En);
    }

    #[test]
    fn test_locale_chinese() {
        assert_eq!(Locale::from_headers(&accept("zh-CN,zh;q=0.9")), Locale::Zh);
    }

    #[test]
    fn test_locale_respects_quality() {
        assert_eq!(
            Locale::from_headers(&accept("en;q=0.5, zh-TW;q=0.8")),
            Locale::Zh
        );
        assert_eq!(
            Locale::from_headers(&accept("zh;q=0, en-US")),
            Locale::En
        );
    }

    #[test]
    fn test_unconfirmed_message_is_localized() {
        assert_eq!(
            Notice::Unconfirmed.message(Locale::En),
            "You have not confirm your account"
        );
        assert_ne!(
            Notice::Unconfirmed.message(Locale::Zh),
            Notice::Unconfirmed.message(Locale::En)
        );
    }

    #[test]
    fn test_notice_code_roundtrip() {
        for notice in [Notice::Unconfirmed, Notice::LoginRequired] {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("bogus"), None);
    }

    #[test]
    fn test_flash_from_cookie() {
        let mut headers = accept("zh");
        headers.insert(header::COOKIE, HeaderValue::from_static("flash=unconfirmed"));

        let flash = Flash::from_headers(&headers);
        assert_eq!(flash.message(), Some("你还没有验证你的账户"));
    }

    #[test]
    fn test_consume_clears_cookie_only_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("flash=bogus"));

        let response = Flash::from_headers(&headers).consume("page");
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));

        let response = Flash::from_headers(&HeaderMap::new()).consume("page");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
