/**
 * Server Initialization
 *
 * This module builds the Axum application: it opens the store, wraps it in
 * `AppState` and hands that to the router.
 */

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{SharedStore, StoreError};
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if a configured database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing chat-room backend");

    let store = load_store(config).await?;
    Ok(create_app_with_store(store))
}

/// Build the application around an already-open store
pub fn create_app_with_store(store: SharedStore) -> Router<()> {
    let app = create_router(AppState::new(store));
    tracing::info!("Router configured");
    app
}
