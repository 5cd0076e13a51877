//! Authentication Module
//!
//! This module handles user registration and login. It provides the HTTP
//! handlers, the credential workflow behind them, and the stores that hold
//! user records.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and UserStore trait
//! ├── pg_store.rs     - PostgreSQL store
//! ├── memory_store.rs - In-memory store
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT issue and verify
//! ├── service.rs      - Register and login workflows
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → password hashed → user stored → 201
//! 2. **Login**: email, password → user looked up → hash verified → JWT returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10 unless configured) before storage
//! - Tokens are HS256 JWTs carrying `userId`, expiring one hour after issue
//! - The signing secret must be configured; there is no fallback value

/// User data model and store contract
pub mod users;

/// PostgreSQL user store
pub mod pg_store;

/// In-memory user store
pub mod memory_store;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Register and login workflows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{health_check, login, register};
pub use memory_store::MemoryUserStore;
pub use passwords::PasswordHasher;
pub use pg_store::PgUserStore;
pub use service::{CredentialService, ValidLogin, ValidRegistration};
pub use sessions::{Claims, TokenIssuer};
pub use users::{NewUser, StoreError, User, UserStore};
