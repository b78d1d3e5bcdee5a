/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Participants
 * - `POST /participants` - Register a participant
 * - `GET /participants` - List participants
 * - `POST /status` - Presence heartbeat (`user` header)
 *
 * ## Messages
 * - `POST /messages` - Post a message (`user` header)
 * - `GET /messages` - Visible messages (`user` header, optional `limit`)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::messages::{get_messages, post_message};
use crate::backend::participants::{heartbeat, list_participants, register_participant};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Participant registry
        .route(
            "/participants",
            post(register_participant).get(list_participants),
        )
        // Chat log
        .route("/messages", post(post_message).get(get_messages))
        // Presence
        .route("/status", post(heartbeat))
}
