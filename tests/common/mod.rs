//! Common test utilities and helpers
//!
//! - Test servers over the in-memory and SQLite stores
//! - A store double that fails every call
//! - Request shortcuts for the chat endpoints

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use serde_json::json;

use chatroom::backend::{create_app_with_store, ChatStore, MemoryStore, SqliteStore, StoreError};
use chatroom::shared::{Message, Participant};

/// Server backed by a fresh in-memory store
pub fn memory_server() -> TestServer {
    TestServer::new(create_app_with_store(Arc::new(MemoryStore::new())))
        .expect("Failed to create test server")
}

/// Server backed by a fresh in-memory SQLite database
pub async fn sqlite_server() -> TestServer {
    let store = SqliteStore::connect("sqlite::memory:")
        .await
        .expect("Failed to open test database");
    TestServer::new(create_app_with_store(Arc::new(store))).expect("Failed to create test server")
}

/// Server whose store fails every operation
pub fn failing_server() -> TestServer {
    TestServer::new(create_app_with_store(Arc::new(FailingStore)))
        .expect("Failed to create test server")
}

/// Store double standing in for an unreachable database
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ChatStore for FailingStore {
    async fn register(&self, _: &Participant, _: &Message) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn find_participant(&self, _: &str) -> Result<Option<Participant>, StoreError> {
        Err(unavailable())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError> {
        Err(unavailable())
    }

    async fn append_message(&self, _: &Message) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        Err(unavailable())
    }

    async fn touch_participant(&self, _: &str, _: i64) -> Result<Option<i64>, StoreError> {
        Err(unavailable())
    }
}

/// `user` header naming `name`
pub fn user_header(name: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("user"),
        HeaderValue::from_str(name).expect("invalid header value"),
    )
}

pub async fn register(server: &TestServer, name: &str) -> TestResponse {
    server.post("/participants").json(&json!({ "name": name })).await
}

pub async fn post_message(
    server: &TestServer,
    from: &str,
    to: &str,
    text: &str,
    kind: &str,
) -> TestResponse {
    let (name, value) = user_header(from);
    server
        .post("/messages")
        .add_header(name, value)
        .json(&json!({ "to": to, "text": text, "type": kind }))
        .await
}

pub async fn messages_for(server: &TestServer, user: &str) -> Vec<Message> {
    let (name, value) = user_header(user);
    server.get("/messages").add_header(name, value).await.json()
}

pub async fn participants(server: &TestServer) -> Vec<Participant> {
    server.get("/participants").await.json()
}
