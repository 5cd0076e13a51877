//! Service configuration module
//!
//! Reads the listening port, store location, signing secret and bcrypt cost
//! from the environment. The signing secret has no default: startup fails
//! when it is missing rather than signing tokens with a well-known key.
//!
//! # Variables
//!
//! | Variable       | Required | Default |
//! |----------------|----------|---------|
//! | `PORT`         | no       | `5001`  |
//! | `DATABASE_URL` | yes      |         |
//! | `JWT_SECRET`   | yes      |         |
//! | `BCRYPT_COST`  | no       | `10`    |

use thiserror::Error;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5001;

/// bcrypt work factor used when `BCRYPT_COST` is not set
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest bcrypt work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest bcrypt work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// `DATABASE_URL` value selecting the in-memory user store
pub const MEMORY_STORE_URL: &str = "memory://";

/// Where user records live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// PostgreSQL connection string
    Postgres(String),
    /// Process-local store, lost on restart
    Memory,
}

impl StoreLocation {
    fn parse(url: &str) -> Self {
        if url == MEMORY_STORE_URL {
            Self::Memory
        } else {
            Self::Postgres(url.to_string())
        }
    }
}

/// Service configuration
#[derive(Clone)]
pub struct Config {
    /// Listening port
    pub port: u16,
    /// User store location
    pub store: StoreLocation,
    /// HS256 signing secret
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

// The secret stays out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("store", &self.store)
            .field("jwt_secret", &"[REDACTED]")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl Config {
    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingValue` - `DATABASE_URL` or `JWT_SECRET` is absent or empty
    /// * `ConfigError::InvalidValue` - `PORT` or `BCRYPT_COST` does not parse
    /// * `ConfigError::CostOutOfRange` - `BCRYPT_COST` outside 4..=31
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty variable counts as unset.
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Config::builder();

        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
            builder = builder.port(port);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            let cost = cost
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue { key: "BCRYPT_COST", value: cost })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
}

impl ConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the store connection string (`memory://` for the in-memory store)
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let database_url = self
            .database_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingValue("DATABASE_URL"))?;

        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::CostOutOfRange(bcrypt_cost));
        }

        Ok(Config {
            port: self.port.unwrap_or(DEFAULT_PORT),
            store: StoreLocation::parse(database_url.trim()),
            jwt_secret,
            bcrypt_cost,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("bcrypt cost {0} is outside {min}..={max}", min = MIN_BCRYPT_COST, max = MAX_BCRYPT_COST)]
    CostOutOfRange(u32),
}
