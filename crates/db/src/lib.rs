//! PostgreSQL persistence for warehouse master data and OTA records.
//!
//! - [`models`] -- row structs and input DTOs
//! - [`repositories`] -- one repository per table behind async traits
//! - [`DbConfig`] / [`create_pool`] -- connection pool bootstrap

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Database connection settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Full connection URL. When set, the discrete fields below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// One of `disable`, `allow`, `prefer`, `require`, `verify-ca`, `verify-full`.
    pub ssl_mode: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime_secs: u64,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `DATABASE_URL`         | unset       |
    /// | `DB_HOST`              | `localhost` |
    /// | `DB_PORT`              | `5432`      |
    /// | `DB_USER`              | `postgres`  |
    /// | `DB_PASSWORD`          | empty       |
    /// | `DB_NAME`              | `wms`       |
    /// | `DB_SSLMODE`           | `disable`   |
    /// | `DB_MAX_CONNECTIONS`   | `20`        |
    /// | `DB_MIN_CONNECTIONS`   | `2`         |
    /// | `DB_MAX_LIFETIME_SECS` | `1800`      |
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.into());

        Self {
            url: std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            host: var("DB_HOST", "localhost"),
            port: var("DB_PORT", "5432")
                .parse()
                .expect("DB_PORT must be a valid u16"),
            user: var("DB_USER", "postgres"),
            password: var("DB_PASSWORD", ""),
            name: var("DB_NAME", "wms"),
            ssl_mode: var("DB_SSLMODE", "disable"),
            max_connections: var("DB_MAX_CONNECTIONS", "20")
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid u32"),
            min_connections: var("DB_MIN_CONNECTIONS", "2")
                .parse()
                .expect("DB_MIN_CONNECTIONS must be a valid u32"),
            max_lifetime_secs: var("DB_MAX_LIFETIME_SECS", "1800")
                .parse()
                .expect("DB_MAX_LIFETIME_SECS must be a valid u64"),
        }
    }

    /// Build connect options from the URL, or from the discrete fields.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }

        let ssl_mode: PgSslMode = self.ssl_mode.parse()?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode))
    }
}

/// Create a connection pool from configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect_with(config.connect_options()?)
        .await
}

/// Round-trip a trivial query to verify the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
