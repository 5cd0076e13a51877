/**
 * User Model and Store Contract
 *
 * This module defines the user record and the `UserStore` trait that the
 * credential service persists through. Two stores implement it:
 * `PgUserStore` (PostgreSQL) and `MemoryUserStore` (process-local).
 *
 * # Invariants
 *
 * - `email` is unique across all records; stores report a second insert
 *   with the same email as `StoreError::DuplicateEmail`
 * - `id` is assigned by the store on creation and never changes
 * - `password_hash` holds a bcrypt digest, never plaintext
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// User struct representing a persisted user
///
/// Not `Serialize`: the record carries the password hash and is never
/// written to a response.
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID), assigned by the store
    pub id: uuid::Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique, lookup key)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

// The hash stays out of logs.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Fields supplied by the caller when creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already uses this email
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence contract for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record, assigning its id
    ///
    /// # Errors
    ///
    /// * `StoreError::DuplicateEmail` - a record with this email exists
    /// * `StoreError::Database` - the backend failed
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Find the single record with exactly this email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
