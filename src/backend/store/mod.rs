//! Store Module
//!
//! Persistence for the two collections the chat room keeps: the
//! participant registry and the append-only message log.
//!
//! # Architecture
//!
//! Handlers never talk to a database directly. They receive a
//! [`SharedStore`] (an `Arc<dyn ChatStore>`) through axum state, which keeps
//! the store an explicit dependency and lets tests swap in doubles.
//!
//! - **`sqlite`** - `SqliteStore`, backed by a sqlx `SqlitePool`
//! - **`memory`** - `MemoryStore`, vectors behind a tokio `RwLock`
//!
//! # Guarantees
//!
//! Both implementations provide the same contract:
//!
//! - `register` inserts the participant and its join notice atomically and
//!   reports a taken name as [`StoreError::Duplicate`]; there is no
//!   check-then-insert window.
//! - `list_messages` returns the log in insertion order.
//! - `touch_participant` stores `max(now, previous + 1)` so successive
//!   heartbeats are strictly increasing.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{Message, Participant};

/// SQLite-backed store
pub mod sqlite;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Store handle shared by all handlers
pub type SharedStore = Arc<dyn ChatStore>;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A participant with this name already exists
    #[error("participant '{0}' already exists")]
    Duplicate(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored record could not be decoded
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Backend unavailable for another reason
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations used by the request handlers
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert `participant` together with its join notice
    ///
    /// Fails with [`StoreError::Duplicate`] when the name is taken, in which
    /// case nothing is written.
    async fn register(&self, participant: &Participant, notice: &Message) -> Result<(), StoreError>;

    /// Look a participant up by exact name
    async fn find_participant(&self, name: &str) -> Result<Option<Participant>, StoreError>;

    /// All participants in registration order
    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError>;

    /// Append one entry to the message log
    async fn append_message(&self, message: &Message) -> Result<(), StoreError>;

    /// The whole message log in insertion order
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError>;

    /// Refresh a participant's `lastStatus`
    ///
    /// Returns the stored value, or `None` if no participant has this name.
    async fn touch_participant(&self, name: &str, now: i64) -> Result<Option<i64>, StoreError>;
}

/// Next `lastStatus` value for a heartbeat at `now`
pub(crate) fn next_status(previous: i64, now: i64) -> i64 {
    now.max(previous.saturating_add(1))
}
