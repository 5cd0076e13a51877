/**
 * Backend Error Types
 *
 * This module defines the errors returned by the HTTP handlers. Each variant
 * maps to one status code and one caller-facing message; the underlying
 * cause (store error, bcrypt error, ...) is logged where it happens and is
 * not part of the response.
 *
 * # Status Code Mapping
 *
 * | Variant              | Status | Message               |
 * |----------------------|--------|-----------------------|
 * | `Validation`         | 400    | field-level message   |
 * | `MalformedBody`      | 400    | JSON parser message   |
 * | `InvalidCredentials` | 400    | "Invalid credentials" |
 * | `UserNotFound`       | 404    | "User not found"      |
 * | `RegistrationFailed` | 500    | "Registration failed" |
 * | `LoginFailed`        | 500    | "Login failed"        |
 * | `HandlerError`       | any    | caller supplied       |
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Errors surfaced to HTTP callers
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body failed required-field checks
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Request body was not valid JSON for the endpoint
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// No user has the supplied email
    #[error("User not found")]
    UserNotFound,

    /// The supplied password does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Any failure while registering, duplicate email included
    #[error("Registration failed")]
    RegistrationFailed,

    /// Unexpected store, hashing or signing failure during login
    #[error("Login failed")]
    LoginFailed,

    /// Generic error with an explicit status (e.g. unknown route)
    #[error("{message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl AuthError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::RegistrationFailed | Self::LoginFailed => StatusCode::INTERNAL_SERVER_ERROR,
            Self::HandlerError { status, .. } => *status,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
