//! Cookie session middleware for the comment and reply routes.

use axum::{
    extract::{Request, State},
    http::{Uri, header::SET_COOKIE},
    middleware::Next,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use url::form_urlencoded;

use crate::domain::entities::{Capability, Identity};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::cookie_value;
use crate::web::flash::Notice;

pub const SESSION_COOKIE: &str = "session";

/// Requires a valid session, attaching its [`Identity`] to the request.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `session` cookie from request
/// 2. Resolve it via [`crate::application::services::AuthService`]
/// 3. On success, insert the identity into request extensions and continue
/// 4. On a missing, unknown or revoked token, redirect to the login URL with
///    `next` pointing back here and a "please log in" flash
///
/// Database failures while resolving the session render as a 500 page.
pub async fn login_required(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(token) = cookie_value(req.headers(), SESSION_COOKIE) else {
        return login_redirect(&st, req.uri());
    };

    match st.auth_service.authenticate(&token).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(AppError::Unauthorized { .. }) => login_redirect(&st, req.uri()),
        Err(e) => e.into_response(),
    }
}

/// Requires the authenticated identity to hold the writer capability.
///
/// Without it, sets the "account not confirmed" flash and redirects to the
/// listing root. Must run after [`login_required`].
pub async fn writer_required(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let identity = req.extensions().get::<Identity>().cloned();

    match identity {
        Some(identity) if identity.can(Capability::Writer) => next.run(req).await,
        Some(identity) => {
            tracing::info!(
                user_id = identity.user_id,
                path = %req.uri().path(),
                "Submission refused: account not confirmed"
            );
            flash_redirect(&st, Notice::Unconfirmed, "/")
        }
        None => login_redirect(&st, req.uri()),
    }
}

fn login_redirect(st: &AppState, uri: &Uri) -> Response {
    let next: String = form_urlencoded::byte_serialize(uri.path().as_bytes()).collect();
    let target = format!("{}?next={}", st.settings.login_url, next);
    flash_redirect(st, Notice::LoginRequired, &target)
}

fn flash_redirect(st: &AppState, notice: Notice, target: &str) -> Response {
    let redirect = Redirect::to(target);
    match notice.cookie(st.settings.secure_cookies) {
        Some(cookie) => (AppendHeaders([(SET_COOKIE, cookie)]), redirect).into_response(),
        None => redirect.into_response(),
    }
}
