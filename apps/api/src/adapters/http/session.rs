//! Request authentication: session tokens and the shared admin key.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::CookieJar;
use secrecy::ExposeSecret;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::jwt::{self, Claims},
};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Bearer header first, then the session cookie.
fn session_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    jar.get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Verified session claims, or `InvalidCredentials`.
pub fn current_session(
    jar: &CookieJar,
    headers: &HeaderMap,
    app_state: &AppState,
) -> AppResult<Claims> {
    let Some(token) = session_token(jar, headers) else {
        return Err(AppError::InvalidCredentials);
    };
    jwt::verify(&token, &app_state.config.jwt_secret)
}

/// Admin endpoints accept a session that carries an email, or the configured
/// admin key in `x-admin-key`. Without a configured key only sessions work.
pub fn authorize_admin(jar: &CookieJar, headers: &HeaderMap, app_state: &AppState) -> AppResult<()> {
    let has_session_email = current_session(jar, headers, app_state)
        .ok()
        .and_then(|claims| claims.email)
        .is_some_and(|email| !email.is_empty());
    if has_session_email {
        return Ok(());
    }

    let provided = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match (&app_state.config.admin_secret, provided) {
        (Some(secret), Some(provided))
            if constant_time_compare(secret.expose_secret(), provided) =>
        {
            tracing::info!("Admin request authorized by shared key");
            Ok(())
        }
        _ => Err(AppError::AdminUnauthorized),
    }
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
