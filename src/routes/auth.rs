//! Auth routes — login gate, session cookie, logout.

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::error::error_response;
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state, token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// `POST /api/auth/login` — validate the form, mint a session, set the
/// cookie. No credential store is consulted; the password is checked
/// for presence and dropped.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(req): Json<LoginRequest>) -> Response {
    let email = match state.auth.verify(&req.email, &req.password).await {
        Ok(email) => email,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, &e),
    };

    let (token, user) = session::create_session(&state, &email).await;
    tracing::info!(user_id = %user.id, "auth: login");

    // Session cookie, no max-age: nothing outlives the in-memory state
    // that backs it anyway.
    let cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure());

    (jar.add(cookie), Json(user)).into_response()
}

/// `POST /api/auth/logout` — delete the session and all dashboard
/// state, clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar, auth: AuthUser) -> Response {
    session::delete_session(&state, &auth.token).await;
    tracing::info!(user_id = %auth.user.id, "auth: logout");

    let removal = Cookie::build((COOKIE_NAME, "")).path("/");
    (jar.remove(removal), StatusCode::NO_CONTENT).into_response()
}

/// `GET /api/auth/me` — the logged-in identity.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
