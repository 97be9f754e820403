//! Database connection pool management.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;

/// Database handle passed to business actions.
pub type Db = SqlitePool;

/// Create a SQLite connection pool.
pub async fn create_pool(config: &Config) -> Result<Db> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &Db) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    info!("database migrations applied");
    Ok(())
}

/// Check if the database connection is healthy.
pub async fn check_health(pool: &Db) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_schema() {
        let pool = league_test_utils::memory_pool().await;
        run_migrations(&pool).await.unwrap();
        // Idempotent.
        run_migrations(&pool).await.unwrap();
        assert!(check_health(&pool).await);

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name NOT LIKE 'sqlite%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(names, vec!["game", "game_result", "league_season", "player"]);
    }

    #[tokio::test]
    async fn create_pool_from_config() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };
        let pool = create_pool(&config).await.unwrap();
        assert!(check_health(&pool).await);
    }

    #[tokio::test]
    async fn closed_pool_is_unhealthy() {
        let pool = league_test_utils::memory_pool().await;
        pool.close().await;
        assert!(!check_health(&pool).await);
    }
}
