/**
 * Store Configuration
 *
 * Opens the user store named by `DATABASE_URL`. A PostgreSQL URL connects a
 * pool and runs migrations; `memory://` selects the in-memory store.
 *
 * # Error Handling
 *
 * Unlike optional services, the store is required: a failed connection or
 * migration is returned to the caller and aborts startup.
 */

use std::sync::Arc;

use crate::backend::auth::memory_store::MemoryUserStore;
use crate::backend::auth::pg_store::PgUserStore;
use crate::backend::auth::users::{StoreError, UserStore};
use crate::shared::config::StoreLocation;

/// Open the configured user store
pub async fn load_store(location: &StoreLocation) -> Result<Arc<dyn UserStore>, StoreError> {
    match location {
        StoreLocation::Postgres(url) => {
            let store = PgUserStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to open PostgreSQL store: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        StoreLocation::Memory => {
            tracing::warn!("Using in-memory user store; records are lost on restart");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
