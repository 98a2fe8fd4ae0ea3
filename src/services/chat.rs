//! Conversation manager — send pipeline, fallback handling, reset.
//!
//! DESIGN
//! ======
//! A send appends the user message and flips the dashboard's in-flight
//! flag under one write lock, assembles context from a snapshot of the
//! log, calls the injected `GenerateText` with the lock released, then
//! re-locks to append the reply.
//!
//! Two race decisions are explicit rather than UI-timing accidents:
//! - concurrent sends for one session are rejected (`ChatError::Busy`),
//! - each dashboard carries an `epoch` bumped by reset/logout; a reply
//!   whose captured epoch no longer matches is dropped, never appended
//!   onto a log it was not generated from.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::state::{AppState, ChatMessage, DashboardState, Sender};

use super::context::assemble_context;

/// Fixed user-facing reply appended when the remote call fails for any
/// reason. Causes are logged, never surfaced or retried.
pub const FALLBACK_MESSAGE: &str =
    "I'm having a little trouble connecting right now. Please try again in a moment.";

/// The greeting every fresh or reset conversation starts with. The log
/// is never empty in normal operation.
pub const SEED_GREETING: &str =
    "Hi, I'm Haven. This is a quiet space to check in with yourself. How are you feeling today?";

const SYSTEM_PROMPT: &str = "You are Haven, a gentle wellness companion. You listen first, \
     validate feelings, and offer small, practical suggestions like breathing exercises, \
     grounding, or journaling. Keep replies warm and brief, two to four sentences. \
     You are not a therapist and you never diagnose or prescribe. If someone describes \
     a crisis or thoughts of self-harm, encourage them to reach the 988 Suicide & Crisis \
     Lifeline or their local emergency number right away.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// A reply is already being generated for this session.
    #[error("a reply is already being generated")]
    Busy,
    /// The session's dashboard state is gone (logged out elsewhere).
    #[error("session is no longer active")]
    SessionGone,
    /// The message was empty after trimming.
    #[error("message is empty")]
    EmptyMessage,
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Busy => "E_BUSY",
            Self::SessionGone => "E_SESSION_GONE",
            Self::EmptyMessage => "E_EMPTY_MESSAGE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Outcome of a completed send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The model (or fallback) reply appended to the log.
    Reply(String),
    /// Context assembly produced nothing; no remote call was made.
    Aborted,
    /// The log was reset or removed while the request was in flight;
    /// the reply was dropped.
    Superseded,
}

#[must_use]
pub fn seed_greeting() -> ChatMessage {
    ChatMessage { sender: Sender::Model, text: SEED_GREETING.to_string(), silent: false }
}

// =============================================================================
// SEND PIPELINE
// =============================================================================

/// Append a user message and generate a model reply.
///
/// `silent` messages stay in the log and in model context but are
/// hidden from the rendered history.
///
/// # Errors
///
/// [`ChatError::Busy`] when a request is already in flight,
/// [`ChatError::SessionGone`] when the dashboard no longer exists,
/// [`ChatError::EmptyMessage`] for whitespace-only input. None of these
/// mutate the log.
pub async fn send_message(
    state: &AppState,
    token: &str,
    text: &str,
    silent: bool,
) -> Result<SendOutcome, ChatError> {
    send_message_with(state, token, text, silent, |_| {}).await
}

/// [`send_message`] with a prepare hook run inside the same critical
/// section that claims the in-flight slot. Callers use it to commit
/// side mutations (a mood entry, an announcement turn) together with
/// the busy check, so [`ChatError::Busy`] can never fire after any
/// state has changed.
pub(crate) async fn send_message_with(
    state: &AppState,
    token: &str,
    text: &str,
    silent: bool,
    prepare: impl FnOnce(&mut DashboardState),
) -> Result<SendOutcome, ChatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let request_id = Uuid::new_v4();

    // Phase 1: run the prepare hook, append the user message, and claim
    // the in-flight slot, all under one lock.
    let (epoch, snapshot) = {
        let mut dashboards = state.dashboards.write().await;
        let dash = dashboards.get_mut(token).ok_or(ChatError::SessionGone)?;
        if dash.in_flight {
            return Err(ChatError::Busy);
        }
        prepare(dash);
        dash.messages
            .push(ChatMessage { sender: Sender::User, text: text.to_string(), silent });
        dash.in_flight = true;
        (dash.epoch, dash.messages.clone())
    };

    // Phase 2: assemble. An empty turn list aborts without a remote call.
    let Some(turns) = assemble_context(&snapshot) else {
        clear_in_flight(state, token).await;
        info!(%request_id, "chat: nothing to send, aborting");
        return Ok(SendOutcome::Aborted);
    };

    info!(%request_id, turns = turns.len(), silent, "chat: sending");

    // Phase 3: call the model. Any failure becomes the fixed fallback.
    let reply = match &state.llm {
        None => {
            warn!(%request_id, "chat: no LLM client configured, using fallback");
            FALLBACK_MESSAGE.to_string()
        }
        Some(llm) => match llm.generate(SYSTEM_PROMPT, &turns).await {
            Ok(resp) => {
                info!(
                    %request_id,
                    model = %resp.model,
                    input_tokens = resp.input_tokens,
                    output_tokens = resp.output_tokens,
                    "chat: reply received"
                );
                if resp.text.trim().is_empty() {
                    // A blank completion still has to clear the loading
                    // state with exactly one model turn.
                    FALLBACK_MESSAGE.to_string()
                } else {
                    resp.text
                }
            }
            Err(e) => {
                warn!(
                    %request_id,
                    error = %e,
                    code = e.error_code(),
                    retryable = e.retryable(),
                    "chat: generate failed, using fallback"
                );
                FALLBACK_MESSAGE.to_string()
            }
        },
    };

    // Phase 4: append only if the log is still the one we sent from.
    let mut dashboards = state.dashboards.write().await;
    match dashboards.get_mut(token) {
        None => {
            info!(%request_id, "chat: session gone before reply, dropping");
            Ok(SendOutcome::Superseded)
        }
        Some(dash) if dash.epoch != epoch => {
            // Reset already cleared in_flight when it bumped the epoch.
            info!(%request_id, "chat: log reset mid-flight, dropping reply");
            Ok(SendOutcome::Superseded)
        }
        Some(dash) => {
            dash.messages
                .push(ChatMessage { sender: Sender::Model, text: reply.clone(), silent: false });
            dash.in_flight = false;
            Ok(SendOutcome::Reply(reply))
        }
    }
}

async fn clear_in_flight(state: &AppState, token: &str) {
    if let Some(dash) = state.dashboards.write().await.get_mut(token) {
        dash.in_flight = false;
    }
}

// =============================================================================
// RESET / HISTORY
// =============================================================================

/// Start a new conversation: seed greeting only, in-flight cleared,
/// epoch bumped so any pending reply is dropped. Mood history and the
/// journal prompt survive; only logout clears those.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn reset(state: &AppState, token: &str) -> Result<(), ChatError> {
    let mut dashboards = state.dashboards.write().await;
    let dash = dashboards.get_mut(token).ok_or(ChatError::SessionGone)?;
    dash.messages.clear();
    dash.messages.push(seed_greeting());
    dash.in_flight = false;
    dash.epoch += 1;
    Ok(())
}

/// The rendered chat history: silent entries filtered out.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn visible_history(state: &AppState, token: &str) -> Result<Vec<ChatMessage>, ChatError> {
    let dashboards = state.dashboards.read().await;
    let dash = dashboards.get(token).ok_or(ChatError::SessionGone)?;
    Ok(dash.messages.iter().filter(|m| !m.silent).cloned().collect())
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
