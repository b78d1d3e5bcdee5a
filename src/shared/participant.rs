/**
 * Participant Data Structure
 *
 * A participant is a registered chat identity, unique by name. The
 * `lastStatus` field records the last registration or heartbeat time in
 * milliseconds since the Unix epoch and is what a presence view would use
 * to decide who is still online.
 */

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A registered chat participant
///
/// Serialized with camelCase keys so the JSON shape is
/// `{"name": "Alice", "lastStatus": 1700000000000}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique participant name
    pub name: String,
    /// Last registration/heartbeat time, Unix epoch milliseconds
    pub last_status: i64,
}

impl Participant {
    /// Create a participant stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_status: now_millis(),
        }
    }
}

/// Validated body of `POST /participants`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewParticipant {
    pub name: String,
}

/// Current wall-clock time in Unix epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
