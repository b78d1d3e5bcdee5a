/**
 * Message Data Structure
 *
 * This module defines the chat-log entry and its kinds. Messages are
 * immutable once stored; the log order is insertion order.
 *
 * # Kinds
 *
 * - `message` - public, visible to everyone
 * - `private_message` - visible to the sender and the named recipient
 * - `status` - system join notice written on registration
 */

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recipient sentinel meaning "everyone in the room"
pub const EVERYONE: &str = "Todos";

/// Text of the notice written when a participant joins
pub const JOIN_NOTICE_TEXT: &str = "entrar na sala...";

/// Kind of a chat-log entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    PrivateMessage,
    Status,
}

impl MessageKind {
    /// Kinds a client is allowed to post
    pub const POSTABLE: [MessageKind; 2] = [MessageKind::Message, MessageKind::PrivateMessage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown message kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for MessageKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            "status" => Ok(Self::Status),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// A single chat-log entry
///
/// `from` and `to` reference participants by name only; nothing keeps them
/// consistent with the participant registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Sender name
    pub from: String,
    /// Recipient name, or [`EVERYONE`]
    pub to: String,
    /// Message body
    pub text: String,
    /// Entry kind, serialized as `type`
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Local wall-clock time of insertion, `HH:MM:SS`
    pub time: String,
}

impl Message {
    /// Create a message stamped with the current local time
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            kind,
            time: clock_time(),
        }
    }

    /// The status entry recorded when `name` joins the room
    pub fn join_notice(name: &str) -> Self {
        Self::new(name, EVERYONE, JOIN_NOTICE_TEXT, MessageKind::Status)
    }

    /// Whether `user` is entitled to see this entry
    ///
    /// Public messages are visible to everyone; anything else only to its
    /// sender and its addressee. Without an identity only public messages
    /// are visible.
    pub fn is_visible_to(&self, user: Option<&str>) -> bool {
        if self.kind == MessageKind::Message {
            return true;
        }
        match user {
            Some(user) => self.to == user || self.from == user,
            None => false,
        }
    }
}

/// Validated body of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMessage {
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

/// Current local time formatted as `HH:MM:SS`
pub fn clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
