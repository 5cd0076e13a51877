//! Database test fixtures
//!
//! The PostgreSQL tests run only when `TEST_DATABASE_URL` (or
//! `DATABASE_URL`) points at a Postgres server; otherwise they return early.

use authserver::backend::auth::PgUserStore;
use sqlx::PgPool;

/// Connection string for the test database, if one is configured
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .filter(|url| url.starts_with("postgres://") || url.starts_with("postgresql://"))
}

/// Create a test database connection pool
pub async fn create_test_pool(url: &str) -> PgPool {
    PgPool::connect(url)
        .await
        .expect("Failed to create test database pool")
}

/// Connect a store, running the embedded migrations
pub async fn connect_test_store(url: &str) -> PgUserStore {
    PgUserStore::connect(url)
        .await
        .expect("Failed to connect store and run migrations")
}

/// Email that no other test run has used
pub fn unique_email(local: &str) -> String {
    format!("{}.{}@example.com", local, uuid::Uuid::new_v4().simple())
}
