/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register and login handlers.
 * Request fields default to empty so a missing field and an empty one both
 * fail `validate()` with the same field-level message.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::service::{ValidLogin, ValidRegistration};
use crate::shared::error::{require_non_empty, SharedError};

/// Register request
///
/// Contains the display name, email and password for a new user.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// User's display name
    #[serde(default)]
    pub name: String,
    /// User's email address (unique)
    #[serde(default)]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// Check that every field is present and non-empty
    pub fn validate(self) -> Result<ValidRegistration, SharedError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)?;

        Ok(ValidRegistration {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be verified against stored hash)
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Check that both fields are present and non-empty
    pub fn validate(self) -> Result<ValidLogin, SharedError> {
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)?;

        Ok(ValidLogin {
            email: self.email,
            password: self.password,
        })
    }
}

/// Plain confirmation body, used by the health check and register
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// JWT for authentication (1-hour expiration)
    pub token: String,
}
