//! Database module - MySQL implementations using SQLx

pub mod mysql;

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::InfrastructureError;
use kf_shared::config::DatabaseConfig;

pub use mysql::MySqlAccountRepository;

/// Build a MySQL connection pool from configuration
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool established"
    );
    Ok(pool)
}

/// Build a MySQL connection pool from environment variables
///
/// Loads a `.env` file when present before reading the variables.
pub async fn connect_from_env() -> Result<MySqlPool, InfrastructureError> {
    dotenvy::dotenv().ok();
    connect(&DatabaseConfig::from_env()).await
}
