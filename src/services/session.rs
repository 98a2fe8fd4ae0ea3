//! Session management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses a long-lived random token carried in a cookie, mapped
//! to the logged-in identity in memory. Deleting a session also deletes
//! its dashboard state — logout fully resets the conversation, mood
//! history, and tool state, and a process restart forgets everything.

use std::fmt::Write;

use rand::Rng;
use uuid::Uuid;

use crate::state::{AppState, DashboardState};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Derive a display name from the email local part.
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let cleaned = local.replace(['.', '_', '-', '+'], " ");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() { email.to_string() } else { trimmed.to_string() }
}

/// Logged-in identity associated with a session token.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique id for this login (logs and correlation only).
    pub id: Uuid,
    /// Normalized email used at login.
    pub email: String,
    /// Display name derived from the email local part.
    pub display_name: String,
}

/// Create a session plus a fresh dashboard, returning the token and
/// the identity it maps to.
pub async fn create_session(state: &AppState, email: &str) -> (String, SessionUser) {
    let token = generate_token();
    let user = SessionUser {
        id: Uuid::new_v4(),
        email: email.to_string(),
        display_name: name_from_email(email),
    };

    state.sessions.write().await.insert(token.clone(), user.clone());
    state
        .dashboards
        .write()
        .await
        .insert(token.clone(), DashboardState::new());
    (token, user)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(state: &AppState, token: &str) -> Option<SessionUser> {
    state.sessions.read().await.get(token).cloned()
}

/// Delete a session and its dashboard state.
pub async fn delete_session(state: &AppState, token: &str) {
    state.sessions.write().await.remove(token);
    state.dashboards.write().await.remove(token);
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
