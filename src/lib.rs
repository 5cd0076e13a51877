//! authserver - Main Library
//!
//! A small authentication service: it registers users with a bcrypt-hashed
//! password and issues a signed JWT on successful login.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and validation error types
//! - **`backend`** - Axum server, credential workflow, user stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use authserver::backend::server::create_app;
//! use authserver::shared::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .database_url("memory://")
//!     .jwt_secret("change-me")
//!     .build()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
