//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the auth service.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── health.rs   - Health check handler
//! ├── register.rs - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`health_check`** - GET / - Liveness message
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//!
//! # Example
//!
//! ```rust,no_run
//! use authserver::backend::auth::handlers::{health_check, login, register};
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example() -> Router<std::sync::Arc<authserver::backend::auth::CredentialService>> {
//! Router::new()
//!     .route("/", get(health_check))
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login))
//! # }
//! ```

/// Request and response types
pub mod types;

/// Health check handler
pub mod health;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};

// Re-export handlers
pub use health::health_check;
pub use login::login;
pub use register::register;
