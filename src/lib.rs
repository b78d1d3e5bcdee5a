//! Chat Room - Main Library
//!
//! A minimal chat-room backend. Participants register a name, post public
//! or private messages, and periodically refresh an "online" status.
//!
//! # Module Structure
//!
//! - **`shared`** - Types and pure logic with no HTTP or storage
//!   dependency: participants, messages, payload validation, configuration
//!
//! - **`backend`** - The Axum server: handlers, routes, error mapping and
//!   the `ChatStore` persistence trait with SQLite and in-memory backends
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatroom::backend::create_app;
//! use chatroom::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Visibility
//!
//! `GET /messages` returns, in insertion order, the entries where the type
//! is `message`, or the caller is the addressee, or the caller is the
//! sender. An optional `limit` keeps only the most recent ones.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
