use std::collections::HashMap;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::Cookie;

use crate::error::ApiError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "clevio_admin_token";
const SESSION_MAX_AGE_SECS: u64 = 8 * 60 * 60;
const LOGIN_REDIRECT: &str = "/login?from=/admin";

/// Parse a `Cookie` header into a map of name to percent-decoded value.
/// Malformed pairs are skipped; the first occurrence of a name wins.
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for cookie in Cookie::split_parse_encoded(header).filter_map(Result::ok) {
        cookies
            .entry(cookie.name().to_string())
            .or_insert_with(|| cookie.value().to_string());
    }
    cookies
}

/// The session token from every `Cookie` header on the request.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| parse_cookies(value).remove(SESSION_COOKIE))
}

/// Build the Set-Cookie header value carrying the standing token.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}{secure}"
    )
}

/// Build a Set-Cookie header that clears the session.
pub fn clear_session_cookie(secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{secure}")
}

fn is_authenticated(parts: &Parts, state: &AppState) -> bool {
    state
        .auth()
        .is_valid(session_token(&parts.headers).as_deref())
}

/// Valid admin session for API routes. Rejects with 401.
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if is_authenticated(parts, state) {
            Ok(AdminSession)
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

/// Valid admin session for HTML pages. Redirects to the login page.
pub struct AdminPage;

impl FromRequestParts<AppState> for AdminPage {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if is_authenticated(parts, state) {
            Ok(AdminPage)
        } else {
            Err(Redirect::to(LOGIN_REDIRECT).into_response())
        }
    }
}
