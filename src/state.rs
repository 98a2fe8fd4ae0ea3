//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It maps session tokens to logged-in identities and to per-session
//! dashboard state. Everything lives in memory behind `RwLock`s; there
//! is no persistence, so a process restart logs everyone out — the
//! server-side analogue of "reload resets the page".

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::llm::GenerateText;
use crate::services::auth::Authenticator;
use crate::services::chat;
use crate::services::journal;
use crate::services::mood::MoodEntry;
use crate::services::session::SessionUser;
use crate::services::tools::ToolState;

// =============================================================================
// MESSAGES
// =============================================================================

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Model,
}

/// One entry in the conversation log. Silent entries stay in the log
/// and in model context but are excluded from the rendered history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub silent: bool,
}

// =============================================================================
// DASHBOARD STATE
// =============================================================================

/// Per-session dashboard state. Created at login, destroyed at logout.
pub struct DashboardState {
    /// Ordered conversation log, seed greeting first.
    pub messages: Vec<ChatMessage>,
    /// Mood history, oldest first, capped by the mood service.
    pub moods: Vec<MoodEntry>,
    /// Currently displayed journal prompt.
    pub journal_prompt: &'static str,
    /// Which self-care panel the modal is showing.
    pub tools: ToolState,
    /// True while a generate request is outstanding for this session.
    pub in_flight: bool,
    /// Bumped by reset/logout; replies from an older epoch are dropped.
    pub epoch: u64,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![chat::seed_greeting()],
            moods: Vec::new(),
            journal_prompt: journal::draw_prompt(),
            tools: ToolState::default(),
            in_flight: false,
            epoch: 0,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State
/// extractor. Clone is required by Axum — all inner fields are
/// Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Session token -> logged-in identity.
    pub sessions: Arc<RwLock<HashMap<String, SessionUser>>>,
    /// Session token -> dashboard state.
    pub dashboards: Arc<RwLock<HashMap<String, DashboardState>>>,
    /// `None` when LLM env vars are not configured; sends then degrade
    /// to the fallback message.
    pub llm: Option<Arc<dyn GenerateText>>,
    /// Credential check seam (stub in production, mockable in tests).
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn GenerateText>>, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            dashboards: Arc::new(RwLock::new(HashMap::new())),
            llm,
            auth,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chat::SEED_GREETING;
    use crate::services::journal::PROMPTS;

    #[test]
    fn fresh_dashboard_has_exactly_the_seed_greeting() {
        let dash = DashboardState::new();
        assert_eq!(dash.messages.len(), 1);
        assert_eq!(dash.messages[0].text, SEED_GREETING);
        assert_eq!(dash.messages[0].sender, Sender::Model);
        assert!(!dash.messages[0].silent);
    }

    #[test]
    fn fresh_dashboard_is_idle_at_epoch_zero() {
        let dash = DashboardState::new();
        assert!(!dash.in_flight);
        assert_eq!(dash.epoch, 0);
        assert!(dash.moods.is_empty());
        assert!(PROMPTS.contains(&dash.journal_prompt));
    }

    #[test]
    fn chat_message_serde_round_trip() {
        let msg = ChatMessage { sender: Sender::User, text: "hi".into(), silent: true };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"user\""));
        let restored: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.sender, Sender::User);
        assert!(restored.silent);
    }
}
