//! Backend Module
//!
//! Server-side code for the auth service: an Axum HTTP server with three
//! endpoints backed by a user store.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential workflow, password hashing, JWT tokens, stores
//! - **`error`** - Handler error type and JSON conversion
//!
//! # Endpoints
//!
//! - `GET /` - Health check
//! - `POST /api/auth/register` - Create a user
//! - `POST /api/auth/login` - Exchange credentials for a one-hour JWT
//!
//! # Thread Safety
//!
//! Requests are handled concurrently. The only shared resource is the user
//! store (a `PgPool`, or the in-memory map behind a `RwLock`). bcrypt work
//! runs on tokio's blocking pool so slow hashes do not hold up other
//! requests.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Re-export commonly used types
pub use error::AuthError;
pub use server::create_app;
