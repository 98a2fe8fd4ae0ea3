//! Service layer: session lifecycle, conversation management, mood and
//! journal features, static tool panels.

pub mod auth;
pub mod chat;
pub mod context;
pub mod journal;
pub mod mood;
pub mod session;
pub mod tools;
