/**
 * Health Check Handler
 *
 * GET / - always answers 200 while the process is serving requests.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;

/// Message returned by the health check
pub const HEALTH_MESSAGE: &str = "Auth Service is up and running!";

pub async fn health_check() -> Json<MessageResponse> {
    tracing::debug!("Health check");
    Json(MessageResponse::new(HEALTH_MESSAGE))
}
