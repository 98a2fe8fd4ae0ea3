//! Mood logger.
//!
//! DESIGN
//! ======
//! Recording a mood does three things atomically with respect to the
//! dashboard lock: appends a dated entry (history capped at the seven
//! most recent, oldest evicted first), appends a silent user turn so
//! the selection lands in model context without being rendered, then
//! drives a normal send with a synthesized supportive-remark prompt.
//! Same-day entries do not dedupe; each selection is its own entry.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::state::{AppState, ChatMessage, Sender};

use super::chat::{self, ChatError, SendOutcome};

/// History keeps the most recent seven entries.
pub const MOOD_HISTORY_CAP: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Anxious,
}

impl Mood {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
        }
    }
}

/// One recorded mood selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    pub date: Date,
}

// =============================================================================
// RECORDING
// =============================================================================

/// Record a mood selection and trigger a supportive model reply.
///
/// # Errors
///
/// [`ChatError::Busy`] when a reply is already being generated (nothing
/// is recorded), [`ChatError::SessionGone`] when the dashboard no
/// longer exists.
pub async fn record_mood(state: &AppState, token: &str, mood: Mood) -> Result<SendOutcome, ChatError> {
    let today = OffsetDateTime::now_utc().date();
    let prompt = format!(
        "I just logged that I'm feeling {}. Could you offer a brief, supportive thought?",
        mood.label()
    );

    // The entry and announcement commit inside the send pipeline's
    // busy-check critical section, so a rejected record leaves no trace.
    let outcome = chat::send_message_with(state, token, &prompt, true, |dash| {
        dash.moods.push(MoodEntry { mood, date: today });
        if dash.moods.len() > MOOD_HISTORY_CAP {
            dash.moods.remove(0);
        }

        dash.messages.push(ChatMessage {
            sender: Sender::User,
            text: format!("I'm feeling {}.", mood.label()),
            silent: true,
        });
    })
    .await?;

    info!(mood = mood.label(), "mood: recorded");
    Ok(outcome)
}

/// The session's mood history, oldest first.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn history(state: &AppState, token: &str) -> Result<Vec<MoodEntry>, ChatError> {
    let dashboards = state.dashboards.read().await;
    let dash = dashboards.get(token).ok_or(ChatError::SessionGone)?;
    Ok(dash.moods.clone())
}

#[cfg(test)]
#[path = "mood_test.rs"]
mod tests;
