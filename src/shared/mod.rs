//! Shared Module
//!
//! This module contains the types and pure logic that do not depend on
//! HTTP or storage: the chat data model, the payload validation layer and
//! the server configuration. The backend builds on these.

/// Participant data structure
pub mod participant;

/// Message data structure
pub mod message;

/// Shared error types
pub mod error;

/// Payload schema validation
pub mod validation;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use participant::{NewParticipant, Participant};
pub use message::{Message, MessageKind, NewMessage, EVERYONE};
pub use error::{FieldError, ValidationErrors};
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
