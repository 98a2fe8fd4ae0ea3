//! Self-care tool panels.
//!
//! Static content served as data; the client renders it. Per-session
//! `ToolState` tracks which panel is open in the modal.

use serde::{Deserialize, Serialize};

use crate::state::AppState;

use super::chat::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Breathing,
    Grounding,
    Affirmations,
    Crisis,
}

impl std::str::FromStr for ToolId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breathing" => Ok(Self::Breathing),
            "grounding" => Ok(Self::Grounding),
            "affirmations" => Ok(Self::Affirmations),
            "crisis" => Ok(Self::Crisis),
            _ => Err(()),
        }
    }
}

/// Which panel the modal is showing, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ToolState {
    pub active_tool: Option<ToolId>,
    pub modal_open: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolPanel {
    pub id: ToolId,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// The four fixed panels, in display order.
#[must_use]
pub fn panels() -> &'static [ToolPanel] {
    static PANELS: [ToolPanel; 4] = [
        ToolPanel {
            id: ToolId::Breathing,
            title: "Box Breathing",
            lines: &[
                "Breathe in slowly for 4 counts.",
                "Hold for 4 counts.",
                "Breathe out for 4 counts.",
                "Hold for 4 counts, then repeat for a few minutes.",
            ],
        },
        ToolPanel {
            id: ToolId::Grounding,
            title: "5-4-3-2-1 Grounding",
            lines: &[
                "Name 5 things you can see.",
                "Name 4 things you can touch.",
                "Name 3 things you can hear.",
                "Name 2 things you can smell.",
                "Name 1 thing you can taste.",
            ],
        },
        ToolPanel {
            id: ToolId::Affirmations,
            title: "Affirmations",
            lines: &[
                "This feeling is temporary, and I can ride it out.",
                "I am allowed to take things one step at a time.",
                "I have handled hard days before.",
                "It's okay to ask for help.",
            ],
        },
        ToolPanel {
            id: ToolId::Crisis,
            title: "Crisis Resources",
            lines: &[
                "If you are in immediate danger, call 911 or your local emergency number.",
                "988 Suicide & Crisis Lifeline: call or text 988 (US).",
                "Crisis Text Line: text HOME to 741741 (US).",
                "These lines are free, confidential, and available 24/7.",
            ],
        },
    ];
    &PANELS
}

/// Look up one panel by id.
#[must_use]
pub fn panel(id: ToolId) -> &'static ToolPanel {
    panels()
        .iter()
        .find(|p| p.id == id)
        .expect("every ToolId has a panel")
}

/// Open a panel in the session's modal.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn open_tool(state: &AppState, token: &str, id: ToolId) -> Result<ToolState, ChatError> {
    let mut dashboards = state.dashboards.write().await;
    let dash = dashboards.get_mut(token).ok_or(ChatError::SessionGone)?;
    dash.tools = ToolState { active_tool: Some(id), modal_open: true };
    Ok(dash.tools)
}

/// Close the modal.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn close_tool(state: &AppState, token: &str) -> Result<ToolState, ChatError> {
    let mut dashboards = state.dashboards.write().await;
    let dash = dashboards.get_mut(token).ok_or(ChatError::SessionGone)?;
    dash.tools = ToolState::default();
    Ok(dash.tools)
}

/// The session's current tool state.
///
/// # Errors
///
/// [`ChatError::SessionGone`] when the dashboard no longer exists.
pub async fn tool_state(state: &AppState, token: &str) -> Result<ToolState, ChatError> {
    let dashboards = state.dashboards.read().await;
    let dash = dashboards.get(token).ok_or(ChatError::SessionGone)?;
    Ok(dash.tools)
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
