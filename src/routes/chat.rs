//! Chat routes — send, reset, history, status.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::error_response;
use crate::services::chat::{self, ChatError, SendOutcome};
use crate::state::AppState;

use super::auth::AuthUser;

pub(crate) fn chat_error_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::Busy => StatusCode::CONFLICT,
        ChatError::SessionGone => StatusCode::UNAUTHORIZED,
        ChatError::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub(crate) fn outcome_body(outcome: &SendOutcome) -> serde_json::Value {
    match outcome {
        SendOutcome::Reply(text) => json!({ "reply": text }),
        SendOutcome::Aborted => json!({ "reply": null, "aborted": true }),
        SendOutcome::Superseded => json!({ "reply": null, "superseded": true }),
    }
}

#[derive(Deserialize)]
pub struct SendRequest {
    message: String,
}

/// `POST /api/chat/send` — append a user message, return the model (or
/// fallback) reply.
pub async fn send(State(state): State<AppState>, auth: AuthUser, Json(req): Json<SendRequest>) -> Response {
    match chat::send_message(&state, &auth.token, &req.message, false).await {
        Ok(outcome) => Json(outcome_body(&outcome)).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `POST /api/chat/reset` — start a fresh conversation.
pub async fn reset(State(state): State<AppState>, auth: AuthUser) -> Response {
    match chat::reset(&state, &auth.token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `GET /api/chat/history` — the rendered log, silent entries hidden.
pub async fn history(State(state): State<AppState>, auth: AuthUser) -> Response {
    match chat::visible_history(&state, &auth.token).await {
        Ok(messages) => Json(messages).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `GET /api/chat/status` — whether the LLM is configured and whether a
/// reply is currently being generated.
pub async fn status(State(state): State<AppState>, auth: AuthUser) -> Response {
    let dashboards = state.dashboards.read().await;
    let Some(dash) = dashboards.get(&auth.token) else {
        return error_response(StatusCode::UNAUTHORIZED, &ChatError::SessionGone);
    };
    Json(json!({
        "llm_configured": state.llm.is_some(),
        "in_flight": dash.in_flight,
    }))
    .into_response()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
