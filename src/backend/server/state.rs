/**
 * Application State Management
 *
 * `AppState` is the state attached to the router. It carries the credential
 * service, built once at startup from configuration. The `FromRef`
 * implementation lets handlers extract just the service.
 *
 * # Example
 *
 * ```rust
 * use std::sync::Arc;
 * use axum::extract::State;
 * use authserver::backend::auth::CredentialService;
 *
 * async fn handler(State(service): State<Arc<CredentialService>>) {
 *     let _ = service.tokens();
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::CredentialService;

/// Router state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Register and login workflows
    pub credentials: Arc<CredentialService>,
}

impl AppState {
    pub fn new(credentials: CredentialService) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}

impl FromRef<AppState> for Arc<CredentialService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}
