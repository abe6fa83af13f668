//! PostgreSQL pool, migrations and readiness check
//!
//! The migrations create the recipe tables and seed the category list,
//! so a ready database always has categories to offer.

use crate::config::DatabaseConfig;
use anyhow::{bail, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const APPLICATION_NAME: &str = "recipe-book";
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Open a pool sized by the `[database]` section
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(&config.url)?.application_name(APPLICATION_NAME);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}

/// Apply embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations applied");
    Ok(())
}

/// Readiness check: the database answers and the category seed is present
///
/// Returns the number of categories.
pub async fn health_check(pool: &PgPool) -> Result<i64> {
    let (categories,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e
        })?;

    if categories == 0 {
        bail!("no categories seeded; migrations have not run");
    }
    Ok(categories)
}
