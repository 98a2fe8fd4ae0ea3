//! Journal prompt cycler.
//!
//! A fixed prompt list, drawn uniformly with replacement — repeats are
//! fine. "Write in journal" turns the current prompt into a draft
//! string for the client's input box; it never enters the message log.

use rand::Rng;

use crate::state::AppState;

use super::chat::ChatError;

pub const PROMPTS: [&str; 6] = [
    "What is one small thing that brought you comfort today?",
    "Describe a moment this week when you felt at peace.",
    "What would you tell a friend who was feeling the way you feel right now?",
    "List three things you're grateful for, however small.",
    "What is something you're looking forward to, near or far?",
    "What does taking care of yourself look like today?",
];

/// Draw a prompt uniformly at random, with replacement.
#[must_use]
pub fn draw_prompt() -> &'static str {
    PROMPTS[rand::rng().random_range(0..PROMPTS.len())]
}

/// Template the current prompt into an input draft.
#[must_use]
pub fn draft_for(prompt: &str) -> String {
    format!("Journal entry — \"{prompt}\":\n\n")
}

/// The session's current prompt.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn current_prompt(state: &AppState, token: &str) -> Result<&'static str, ChatError> {
    let dashboards = state.dashboards.read().await;
    let dash = dashboards.get(token).ok_or(ChatError::SessionGone)?;
    Ok(dash.journal_prompt)
}

/// Redraw and store a new prompt for the session.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn new_prompt(state: &AppState, token: &str) -> Result<&'static str, ChatError> {
    let mut dashboards = state.dashboards.write().await;
    let dash = dashboards.get_mut(token).ok_or(ChatError::SessionGone)?;
    dash.journal_prompt = draw_prompt();
    Ok(dash.journal_prompt)
}

/// Draft text for the session's current prompt.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn draft(state: &AppState, token: &str) -> Result<String, ChatError> {
    let prompt = current_prompt(state, token).await?;
    Ok(draft_for(prompt))
}

#[cfg(test)]
#[path = "journal_test.rs"]
mod tests;
