//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature surface is a JSON API under `/api`, gated by the
//! session cookie (the [`auth::AuthUser`] extractor). State lives in
//! memory only; a restart forgets every session and dashboard.

pub mod auth;
pub mod chat;
pub mod journal;
pub mod mood;
pub mod tools;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/chat/send", post(chat::send))
        .route("/api/chat/reset", post(chat::reset))
        .route("/api/chat/history", get(chat::history))
        .route("/api/chat/status", get(chat::status))
        .route("/api/mood", post(mood::record))
        .route("/api/mood/history", get(mood::history))
        .route("/api/journal/prompt", get(journal::current).post(journal::cycle))
        .route("/api/journal/draft", post(journal::draft))
        .route("/api/tools", get(tools::list))
        .route(
            "/api/tools/active",
            get(tools::active).put(tools::open).delete(tools::close),
        )
        .route("/api/tools/{id}", get(tools::show))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
