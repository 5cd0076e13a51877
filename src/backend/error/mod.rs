//! Backend Error Module
//!
//! Errors returned by HTTP handlers and their conversion into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AuthError and its status mapping
//! └── conversion.rs - IntoResponse and JsonRejection conversion
//! ```
//!
//! Every failure is caught at the request boundary and turned into a status
//! code plus `{"error", "status"}` body. Nothing is retried and no request
//! failure stops the server.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
