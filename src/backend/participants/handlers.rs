/**
 * Participant Handlers
 *
 * # Registration Process
 *
 * 1. Validate the payload against the participant schema
 * 2. Stamp a new participant with the current time
 * 3. Store it together with its join notice in one atomic store call
 * 4. A taken name surfaces from the store's unique constraint as 409
 *
 * # Heartbeat
 *
 * `POST /status` re-stamps the caller's `lastStatus`. It never writes a
 * message and never creates a participant.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::middleware::RequestUser;
use crate::backend::store::{SharedStore, StoreError};
use crate::shared::participant::now_millis;
use crate::shared::{Message, NewParticipant, Participant};

/// Register a participant
///
/// # Errors
///
/// * `422 Unprocessable Entity` - payload fails the participant schema
/// * `409 Conflict` - a participant with this name already exists
/// * `500 Internal Server Error` - store failure
///
/// # Example Request
///
/// ```http
/// POST /participants HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Alice" }
/// ```
pub async fn register_participant(
    State(store): State<SharedStore>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(payload) = payload?;

    let request = NewParticipant::try_from(&payload).map_err(|e| {
        tracing::warn!("Rejected participant payload: {}", e);
        e
    })?;

    let participant = Participant::new(request.name);
    let notice = Message::join_notice(&participant.name);

    match store.register(&participant, &notice).await {
        Ok(()) => {
            tracing::info!("Participant joined: {}", participant.name);
            Ok(StatusCode::CREATED)
        }
        Err(StoreError::Duplicate(name)) => {
            tracing::warn!("Participant name already taken: {}", name);
            Err(BackendError::conflict(format!("participant '{name}' already exists")))
        }
        Err(e) => Err(e.into()),
    }
}

/// List every participant in registration order
pub async fn list_participants(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Participant>>, BackendError> {
    let participants = store.list_participants().await?;
    Ok(Json(participants))
}

/// Refresh the caller's `lastStatus`
///
/// # Errors
///
/// * `409 Conflict` - `user` header missing or not a registered participant
/// * `500 Internal Server Error` - store failure
pub async fn heartbeat(
    State(store): State<SharedStore>,
    user: RequestUser,
) -> Result<StatusCode, BackendError> {
    let Some(name) = user.as_deref() else {
        return Err(BackendError::unknown_participant(None));
    };

    match store.touch_participant(name, now_millis()).await? {
        Some(last_status) => {
            tracing::debug!("Heartbeat from {} at {}", name, last_status);
            Ok(StatusCode::OK)
        }
        None => {
            tracing::warn!("Heartbeat from unregistered participant: {}", name);
            Err(BackendError::unknown_participant(Some(name)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::{ChatStore, MemoryStore};
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::sync::Arc;

    fn store() -> SharedStore {
        Arc::new(MemoryStore::new())
    }

    async fn register(store: &SharedStore, name: &str) -> Result<StatusCode, BackendError> {
        register_participant(State(store.clone()), Ok(Json(json!({ "name": name })))).await
    }

    #[tokio::test]
    async fn test_register_twice() {
        let store = store();

        assert_eq!(register(&store, "Alice").await.unwrap(), StatusCode::CREATED);
        assert_matches!(register(&store, "Alice").await, Err(BackendError::Conflict { .. }));

        let Json(participants) = list_participants(State(store.clone())).await.unwrap();
        assert_eq!(participants.len(), 1);
    }

    #[tokio::test]
    async fn test_register_empty_name_writes_nothing() {
        let store = store();

        assert_matches!(register(&store, "").await, Err(BackendError::ValidationFailed(_)));
        assert!(store.list_participants().await.unwrap().is_empty());
        assert!(store.list_messages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_heartbeat_unknown_user() {
        let store = store();
        let result = heartbeat(State(store), RequestUser(Some("ghost".to_string()))).await;
        assert_matches!(result, Err(BackendError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_heartbeat_without_header() {
        let result = heartbeat(State(store()), RequestUser(None)).await;
        assert_matches!(result, Err(BackendError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_heartbeat_advances_last_status() {
        let store = store();
        register(&store, "Alice").await.unwrap();
        let before = store.find_participant("Alice").await.unwrap().unwrap().last_status;

        let status = heartbeat(State(store.clone()), RequestUser(Some("Alice".to_string())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        let after = store.find_participant("Alice").await.unwrap().unwrap().last_status;
        assert!(after > before);
        assert_eq!(store.list_messages().await.unwrap().len(), 1);
    }
}
