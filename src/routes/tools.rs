//! Self-care tool routes — panel content plus the per-session modal.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::error_response;
use crate::services::tools::{self, ToolId};
use crate::state::AppState;

use super::auth::AuthUser;
use super::chat::chat_error_status;

/// `GET /api/tools` — all four panels in display order.
pub async fn list(_auth: AuthUser) -> Response {
    Json(tools::panels()).into_response()
}

/// `GET /api/tools/{id}` — one panel by id, 404 for unknown ids.
pub async fn show(_auth: AuthUser, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<ToolId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("unknown tool: {id}"), "code": "E_UNKNOWN_TOOL", "retryable": false })),
        )
            .into_response();
    };
    Json(tools::panel(id)).into_response()
}

#[derive(Deserialize)]
pub struct OpenToolRequest {
    tool: ToolId,
}

/// `PUT /api/tools/active` — open a panel in the modal.
pub async fn open(State(state): State<AppState>, auth: AuthUser, Json(req): Json<OpenToolRequest>) -> Response {
    match tools::open_tool(&state, &auth.token, req.tool).await {
        Ok(ts) => Json(ts).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `DELETE /api/tools/active` — close the modal.
pub async fn close(State(state): State<AppState>, auth: AuthUser) -> Response {
    match tools::close_tool(&state, &auth.token).await {
        Ok(ts) => Json(ts).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

/// `GET /api/tools/active` — the current modal state.
pub async fn active(State(state): State<AppState>, auth: AuthUser) -> Response {
    match tools::tool_state(&state, &auth.token).await {
        Ok(ts) => Json(ts).into_response(),
        Err(e) => error_response(chat_error_status(&e), &e),
    }
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
