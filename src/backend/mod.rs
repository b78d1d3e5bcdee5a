//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server in front
//! of a participant registry and a message log.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app creation
//! - **`routes`** - Route table, fallback and middleware layers
//! - **`participants`** - Registration, listing, heartbeat handlers
//! - **`messages`** - Posting and visible-message retrieval
//! - **`middleware`** - Requesting-identity extractor
//! - **`store`** - `ChatStore` trait with SQLite and in-memory backends
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Request Flow
//!
//! Every request is handled independently: validate the payload, check it
//! against participant state, persist or reject, respond. Handlers share
//! nothing but the store handle in `AppState`.
//!
//! # Endpoints
//!
//! | Method & Path        | Success | Failure                 |
//! |----------------------|---------|-------------------------|
//! | `POST /participants` | 201     | 422, 409, 500           |
//! | `GET /participants`  | 200     | 500                     |
//! | `POST /messages`     | 201     | 422, 409, 500           |
//! | `GET /messages`      | 200     | 422 (bad `limit`), 500  |
//! | `POST /status`       | 200     | 409, 500                |

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Participant registry handlers
pub mod participants;

/// Chat log handlers
pub mod messages;

/// Middleware for request processing
pub mod middleware;

/// Persistence
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, create_app_with_store, AppState};
pub use store::{ChatStore, MemoryStore, SharedStore, SqliteStore, StoreError};
