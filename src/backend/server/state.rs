/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementation that lets handlers extract the store directly.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use chatroom::backend::store::SharedStore;
 *
 * async fn handler(State(store): State<SharedStore>) {
 *     let participants = store.list_participants().await;
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::store::SharedStore;

/// Application state shared by all handlers
///
/// Holds the single long-lived store handle. Cloning is cheap; every clone
/// points at the same store.
#[derive(Clone)]
pub struct AppState {
    /// Participant registry and message log
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// Implement FromRef for the store handle
///
/// This allows handlers to take `State(store): State<SharedStore>`.
impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
