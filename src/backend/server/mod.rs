//! Server Module
//!
//! Server initialization and shared state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementation
//! ├── config.rs       - Store selection from configuration
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig` names the store and port
//! 2. **Store**: SQLite (migrated) or in-memory
//! 3. **Router**: routes, fallback, tracing and CORS layers

/// Application state management
pub mod state;

/// Store selection
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
