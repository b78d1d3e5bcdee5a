//! Participants Module
//!
//! Registration, listing and presence heartbeats.
//!
//! - `POST /participants` - register a name and write its join notice
//! - `GET /participants` - list every participant
//! - `POST /status` - refresh the caller's `lastStatus`
//!
//! A participant goes from unregistered to active on registration and
//! stays active; heartbeats only re-stamp it. Nothing removes inactive
//! participants.

/// HTTP handlers
pub mod handlers;

pub use handlers::{heartbeat, list_participants, register_participant};
