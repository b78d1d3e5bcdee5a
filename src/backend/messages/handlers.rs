/**
 * Message Handlers
 *
 * `POST /messages` appends an entry from the participant named in the
 * `user` header. `GET /messages` returns the caller's visible subset of
 * the log.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::messages::feed::visible_tail;
use crate::backend::middleware::RequestUser;
use crate::backend::store::SharedStore;
use crate::shared::validation::parse_limit;
use crate::shared::{Message, NewMessage};

/// Query string of `GET /messages`
///
/// `limit` is kept as raw text so a bad value becomes a validation error
/// instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<String>,
}

/// Post a message
///
/// # Errors
///
/// * `422 Unprocessable Entity` - payload fails the message schema
/// * `409 Conflict` - `user` header missing or not a registered participant
/// * `500 Internal Server Error` - store failure
pub async fn post_message(
    State(store): State<SharedStore>,
    user: RequestUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(payload) = payload?;

    let request = NewMessage::try_from(&payload).map_err(|e| {
        tracing::warn!("Rejected message payload: {}", e);
        e
    })?;

    let Some(sender) = user.0 else {
        tracing::warn!("Message posted without a user header");
        return Err(BackendError::unknown_participant(None));
    };

    if store.find_participant(&sender).await?.is_none() {
        tracing::warn!("Message from unregistered sender: {}", sender);
        return Err(BackendError::unknown_participant(Some(&sender)));
    }

    let message = Message::new(sender, request.to, request.text, request.kind);
    store.append_message(&message).await?;

    tracing::info!("Stored {} from {} to {}", message.kind, message.from, message.to);
    Ok(StatusCode::CREATED)
}

/// Get the messages visible to the caller
///
/// # Errors
///
/// * `422 Unprocessable Entity` - malformed query string, or `limit` is
///   present but not a positive integer
/// * `500 Internal Server Error` - store failure
pub async fn get_messages(
    State(store): State<SharedStore>,
    user: RequestUser,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> Result<Json<Vec<Message>>, BackendError> {
    let Query(query) = query?;
    let limit = parse_limit(query.limit.as_deref())?;
    let messages = store.list_messages().await?;

    let visible = visible_tail(messages, user.as_deref(), limit);
    tracing::debug!("Returning {} messages to {:?}", visible.len(), user.as_deref());

    Ok(Json(visible))
}
