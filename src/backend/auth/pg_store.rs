/**
 * PostgreSQL User Store
 *
 * `UserStore` backed by a sqlx `PgPool`. The `users` table is created by the
 * embedded migrations under `migrations/`; its `UNIQUE` constraint on
 * `email` backs both the duplicate check and the lookup.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::auth::users::{NewUser, StoreError, User, UserStore};

/// User store backed by PostgreSQL
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration fails. Both are fatal at startup.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await.map_err(|e| {
            tracing::error!("Failed to run database migrations: {}", e);
            StoreError::Migration(e)
        })?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let id = uuid::Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateEmail(new_user.email.clone())
            }
            other => StoreError::Database(other),
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
