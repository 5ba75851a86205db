use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::{str::FromStr, time::Duration};
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(config: &DatabaseConfig) -> anyhow::Result<ConnectionPool> {
        let ssl_mode = PgSslMode::from_str(&config.ssl_mode)
            .with_context(|| format!("Invalid DATABASE_SSL_MODE '{}'", config.ssl_mode))?;

        let options = PgConnectOptions::from_str(&config.url)
            .context("DATABASE_URL is not a valid postgres connection string")?
            .ssl_mode(ssl_mode);

        info!(
            "🔌 Connecting to database (min: {}, max: {}, ssl: {})",
            config.min_connections, config.max_connections, config.ssl_mode
        );

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}
