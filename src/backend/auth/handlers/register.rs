/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Parse and validate the body (name, email, password all required)
 * 2. Hash password using bcrypt
 * 3. Create user in the store
 * 4. Return a confirmation message
 *
 * # Security
 *
 * - Passwords are hashed before storage and never echoed back
 * - A duplicate email fails with the same generic error as any other
 *   store failure
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::auth::service::CredentialService;
use crate::backend::error::AuthError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON or a field is missing or empty
/// * `500 Internal Server Error` - Hashing or persistence failed, including
///   a duplicate email
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User registered successfully" }
/// ```
pub async fn register(
    State(service): State<Arc<CredentialService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthError> {
    let Json(request) = payload?;
    let input = request.validate().map_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
        e
    })?;
    tracing::info!("Registration request for: {}", input.email);

    service.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}
