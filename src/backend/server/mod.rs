//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - User store loading
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `Config` is loaded by the binary and passed in
//! 2. **Store**: PostgreSQL (with migrations) or in-memory
//! 3. **State Creation**: credential service wrapped in `AppState`
//! 4. **Router Creation**: routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use authserver::backend::server::create_app;
//! use authserver::shared::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// User store loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
