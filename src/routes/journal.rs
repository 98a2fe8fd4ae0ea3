//! Journal routes — prompt cycling and draft text.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::error_response;
use crate::services::journal;
use crate::state::AppState;

use super::auth::AuthUser;
use super::chat::chat_error_status;

/// `GET /api/journal/prompt` — the session's current prompt.
pub async fn current(State(state): State<AppState>, auth: AuthUser) -> Response {
    match journal::current_prompt(&state, &auth.token).await {
        Ok(prompt) => Json(json!({ "prompt": prompt })).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `POST /api/journal/prompt` — draw a different prompt.
pub async fn cycle(State(state): State<AppState>, auth: AuthUser) -> Response {
    match journal::new_prompt(&state, &auth.token).await {
        Ok(prompt) => Json(json!({ "prompt": prompt })).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `POST /api/journal/draft` — a chat draft quoting the current prompt.
pub async fn draft(State(state): State<AppState>, auth: AuthUser) -> Response {
    match journal::draft(&state, &auth.token).await {
        Ok(text) => Json(json!({ "draft": text })).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

#[cfg(test)]
#[path = "journal_test.rs"]
mod tests;
