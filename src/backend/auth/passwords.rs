/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound, so they run on
 * tokio's blocking pool and the calling request yields while they work.
 */

use thiserror::Error;
use tokio::task::JoinError;

/// Password hashing failures
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or the stored hash
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `password` with a fresh random salt
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }

    /// Check `password` against a stored bcrypt hash
    ///
    /// Returns `Ok(false)` on mismatch. An `Err` means the stored hash
    /// itself is unusable.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(valid)
    }
}
