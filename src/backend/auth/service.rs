/**
 * Credential Service
 *
 * The register and login workflows. The store, hasher and token issuer are
 * handed in at construction; the service holds no per-request state.
 *
 * # Outcomes
 *
 * Register: `Ok(User)` or `AuthError::RegistrationFailed` for any store or
 * hashing failure. A duplicate email is logged as such but is reported to
 * the caller through the same generic error.
 *
 * Login: `Ok(token)`, `UserNotFound`, `InvalidCredentials`, or
 * `LoginFailed` for anything unexpected.
 */

use std::sync::Arc;
use std::time::Instant;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{NewUser, StoreError, User, UserStore};
use crate::backend::error::AuthError;

/// Registration input with every field present and non-empty
#[derive(Debug)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login input with both fields present and non-empty
#[derive(Debug)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

/// Registers users and exchanges credentials for tokens
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Token issuer used for login, exposed for verification
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Hash the password and persist a new user
    pub async fn register(&self, input: ValidRegistration) -> Result<User, AuthError> {
        let password_hash = self.hasher.hash(&input.password).await.map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            AuthError::RegistrationFailed
        })?;

        let new_user = NewUser {
            name: input.name,
            email: input.email,
            password_hash,
        };

        let user = self.store.create_user(new_user).await.map_err(|e| {
            match &e {
                StoreError::DuplicateEmail(email) => {
                    tracing::warn!("Registration rejected, email already registered: {}", email);
                }
                other => {
                    tracing::error!("Error during registration: {}", other);
                }
            }
            AuthError::RegistrationFailed
        })?;

        tracing::info!("User registered successfully: {}", user.email);
        Ok(user)
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, input: ValidLogin) -> Result<String, AuthError> {
        let started = Instant::now();

        let user = self
            .store
            .find_by_email(&input.email)
            .await
            .map_err(|e| {
                tracing::error!("Error during login: {}", e);
                AuthError::LoginFailed
            })?;
        tracing::debug!("User lookup took {} ms", started.elapsed().as_millis());

        let user = user.ok_or_else(|| {
            tracing::info!("Login failed: user not found: {}", input.email);
            AuthError::UserNotFound
        })?;

        let verify_started = Instant::now();
        let valid = self
            .hasher
            .verify(&input.password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!("Password verification error for {}: {}", user.email, e);
                AuthError::LoginFailed
            })?;
        tracing::debug!("Password check took {} ms", verify_started.elapsed().as_millis());

        if !valid {
            tracing::info!("Login failed: invalid credentials for {}", user.email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id).map_err(|e| {
            tracing::error!("Failed to create token: {}", e);
            AuthError::LoginFailed
        })?;

        tracing::info!(
            "Login successful for user: {} ({} ms total)",
            user.email,
            started.elapsed().as_millis()
        );
        Ok(token)
    }
}
