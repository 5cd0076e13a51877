//! Shared Error Types
//!
//! This module defines the validation error raised when an incoming request
//! body fails its required-field checks. Handlers convert it into a
//! `400 Bad Request` through `AuthError`.
//!
//! # Usage
//!
//! ```rust
//! use authserver::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must not be empty");
//! assert_eq!(error.field(), "email");
//! ```
use thiserror::Error;

/// Errors produced while validating request input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

/// Reject missing or whitespace-only string fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}
