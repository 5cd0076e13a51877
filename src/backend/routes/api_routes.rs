/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `GET /` - Health check
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * All routes are public.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::handlers::{health_check, login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(health_check))
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}
