//! Common test utilities and helpers
//!
//! Builds a `TestServer` around the in-memory store so the HTTP suite runs
//! without PostgreSQL.

#![allow(dead_code)]

pub mod database;

use std::sync::Arc;

use axum_test::TestServer;
use authserver::backend::auth::{MemoryUserStore, TokenIssuer};
use authserver::backend::server::create_app_with_store;
use authserver::shared::config::{Config, MIN_BCRYPT_COST};

pub const TEST_SECRET: &str = "integration-test-secret";

/// A running test server plus a handle on its store
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryUserStore,
}

impl TestApp {
    pub fn new() -> Self {
        let config = Config::builder()
            .database_url("memory://")
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(MIN_BCRYPT_COST)
            .build()
            .expect("test config");

        let store = MemoryUserStore::new();
        let app = create_app_with_store(&config, Arc::new(store.clone()));
        let server = TestServer::new(app).expect("test server");

        Self { server, store }
    }

    /// Issuer sharing the server's signing secret
    pub fn tokens(&self) -> TokenIssuer {
        TokenIssuer::new(TEST_SECRET)
    }
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
