/**
 * Router Configuration
 *
 * This module assembles the API routes, the fallback handler and the
 * middleware stack into the final Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - a tracing span per request
 * - `CorsLayer` - permissive CORS so browser clients on other origins work
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Unknown paths fall through to a structured 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.fallback(|| async { BackendError::not_found("no such route") });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
