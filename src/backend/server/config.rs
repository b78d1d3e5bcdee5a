/**
 * Store Configuration
 *
 * This module opens the store named by the server configuration.
 *
 * # Selection
 *
 * - `DATABASE_URL` set: a `SqliteStore` at that URL, migrated on open
 * - `DATABASE_URL` unset: a `MemoryStore`; data is lost on restart
 *
 * A configured database that cannot be opened is an error; the server
 * does not silently fall back to memory in that case.
 */

use std::sync::Arc;

use crate::backend::store::{MemoryStore, SharedStore, SqliteStore, StoreError};
use crate::shared::ServerConfig;

/// Open the store selected by `config`
pub async fn load_store(config: &ServerConfig) -> Result<SharedStore, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");

    let store = SqliteStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to open database: {:?}", e);
        e
    })?;

    tracing::info!("Database connection pool created successfully");
    Ok(Arc::new(store))
}
