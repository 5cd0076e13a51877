/**
 * In-Memory User Store
 *
 * `UserStore` kept in a process-local map keyed by email. Selected with
 * `DATABASE_URL=memory://` for local runs and used by the test suites.
 * Records are lost when the process exits.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::users::{NewUser, StoreError, User, UserStore};

/// User store held in memory
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        // Check and insert under the same write lock.
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(StoreError::DuplicateEmail(new_user.email));
        }

        let user = User {
            id: uuid::Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}
