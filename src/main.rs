mod error;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use llm::GenerateText;
use services::auth::StubAuthenticator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize LLM client (non-fatal: chat falls back to a canned reply
    // when config is missing).
    let llm: Option<Arc<dyn GenerateText>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat will use fallback replies");
            None
        }
    };

    let state = state::AppState::new(llm, Arc::new(StubAuthenticator));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "haven listening");
    axum::serve(listener, app).await.expect("server failed");
}
