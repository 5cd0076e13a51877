/**
 * Server Initialization
 *
 * Builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Open the user store (and run migrations for PostgreSQL)
 * 2. Build the password hasher and token issuer from configuration
 * 3. Assemble the credential service and app state
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::service::CredentialService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{StoreError, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::shared::Config;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns an error when the configured store cannot be opened.
pub async fn create_app(config: &Config) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing auth service");

    let store = load_store(&config.store).await?;
    let app = create_app_with_store(config, store);

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the application around an already-open store
pub fn create_app_with_store(config: &Config, store: Arc<dyn UserStore>) -> Router<()> {
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    tracing::info!("Password hashing with bcrypt cost {}", hasher.cost());

    let credentials = CredentialService::new(store, hasher, TokenIssuer::new(&config.jwt_secret));
    create_router(AppState::new(credentials))
}
