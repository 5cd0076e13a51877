/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers:
 *
 * - `TraceLayer` - one span per request (method, URI, status, latency)
 * - `CorsLayer` - any origin may call the API
 * - JSON 404 fallback for unknown routes
 */

use axum::http::StatusCode;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::AuthError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async { AuthError::handler(StatusCode::NOT_FOUND, "Not found") });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
