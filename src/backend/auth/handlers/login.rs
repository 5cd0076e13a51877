/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by exact email
 * 2. Verify password using bcrypt
 * 3. Generate a JWT valid for one hour
 * 4. Return the token
 *
 * Unlike registration, the failure modes are distinguished: an unknown
 * email is 404 and a wrong password is 400.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::CredentialService;
use crate::backend::error::AuthError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Body invalid, or password does not match
/// * `404 Not Found` - No user with this email
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(service): State<Arc<CredentialService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Json(request) = payload?;
    let input = request.validate()?;
    tracing::info!("Login request for: {}", input.email);

    let token = service.login(input).await?;

    Ok(Json(TokenResponse { token }))
}
