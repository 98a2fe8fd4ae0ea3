//! Conversation context assembly.
//!
//! DESIGN
//! ======
//! The generate-content API rejects consecutive same-role turns and a
//! leading model turn, and an empty turn list is not a request at all.
//! This module turns the raw message log into a conforming turn list:
//!
//! 1. window to the most recent `CONTEXT_WINDOW` entries,
//! 2. merge adjacent same-role entries (newline-joined),
//! 3. drop a leading model turn,
//! 4. return `None` when nothing survives.
//!
//! Silent messages are included on purpose: they exist to put things
//! like a mood selection into model context without rendering them.
//! Only the history endpoint filters on the `silent` flag.
//!
//! The log is always passed in explicitly; the assembler never reads
//! shared state, so a reset racing an in-flight request cannot change
//! what was sent.

use crate::llm::types::{Turn, TurnRole};
use crate::state::{ChatMessage, Sender};

/// Maximum number of log entries considered per request, roughly ten
/// user/model exchange pairs.
pub const CONTEXT_WINDOW: usize = 20;

/// Assemble the API turn list from a message log.
///
/// Returns `None` when no sendable turns remain, in which case the
/// caller must abort without issuing a remote call.
#[must_use]
pub fn assemble_context(log: &[ChatMessage]) -> Option<Vec<Turn>> {
    let window = &log[log.len().saturating_sub(CONTEXT_WINDOW)..];

    let mut turns: Vec<Turn> = Vec::new();
    for msg in window {
        let role = match msg.sender {
            Sender::User => TurnRole::User,
            Sender::Model => TurnRole::Model,
        };
        match turns.last_mut() {
            Some(last) if last.role == role => {
                last.text.push('\n');
                last.text.push_str(&msg.text);
            }
            _ => turns.push(Turn { role, text: msg.text.clone() }),
        }
    }

    // The first turn must be user-authored.
    if turns.first().map(|t| t.role) == Some(TurnRole::Model) {
        turns.remove(0);
    }

    if turns.is_empty() { None } else { Some(turns) }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
