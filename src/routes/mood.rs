//! Mood routes — record a check-in, read the recent history.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::error_response;
use crate::services::mood::{self, Mood};
use crate::state::AppState;

use super::auth::AuthUser;
use super::chat::{chat_error_status, outcome_body};

#[derive(Deserialize)]
pub struct MoodRequest {
    mood: Mood,
}

/// `POST /api/mood` — record a mood and return the companion's
/// supportive reply.
pub async fn record(State(state): State<AppState>, auth: AuthUser, Json(req): Json<MoodRequest>) -> Response {
    match mood::record_mood(&state, &auth.token, req.mood).await {
        Ok(outcome) => Json(outcome_body(&outcome)).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `GET /api/mood/history` — up to the last seven check-ins, oldest first.
pub async fn history(State(state): State<AppState>, auth: AuthUser) -> Response {
    match mood::history(&state, &auth.token).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

#[cfg(test)]
#[path = "mood_test.rs"]
mod tests;
