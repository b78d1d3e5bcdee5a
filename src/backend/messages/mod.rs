//! Messages Module
//!
//! Posting to and reading from the chat log.
//!
//! - `POST /messages` - append a public or private message from the caller
//! - `GET /messages` - the caller's visible subset, optionally only the
//!   trailing `limit` entries
//!
//! The visibility rule itself lives in [`feed`].

/// Visible-subset filtering
pub mod feed;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_messages, post_message, MessagesQuery};
