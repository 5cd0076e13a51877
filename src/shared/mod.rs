//! Shared Module
//!
//! Types used on both sides of the HTTP boundary: the service configuration
//! and the validation error raised by request bodies.

/// Shared error types
pub mod error;

/// Service configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{Config, ConfigBuilder, ConfigError, StoreLocation};
