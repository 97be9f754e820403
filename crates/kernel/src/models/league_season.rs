//! League season model.
//!
//! Seasons only partition statistics: rankings and point growth are computed
//! over the most recent season.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::Db;

/// League season record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LeagueSeason {
    pub id: i64,
    pub name: String,
    /// Unix timestamp when created.
    pub created: i64,
}

impl LeagueSeason {
    /// Create a new season; it becomes the current one.
    pub async fn create(pool: &Db, name: &str) -> Result<Self> {
        let now = chrono::Utc::now().timestamp();

        let season = sqlx::query_as::<_, LeagueSeason>(
            "INSERT INTO league_season (name, created) VALUES (?, ?) RETURNING id, name, created",
        )
        .bind(name)
        .bind(now)
        .fetch_one(pool)
        .await
        .with_context(|| format!("failed to create league season '{name}'"))?;

        Ok(season)
    }

    /// The most recently created season.
    pub async fn latest(pool: &Db) -> Result<Option<Self>> {
        let season = sqlx::query_as::<_, LeagueSeason>(
            "SELECT id, name, created FROM league_season ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .context("failed to fetch latest league season")?;

        Ok(season)
    }

    /// All seasons, oldest first.
    pub async fn list(pool: &Db) -> Result<Vec<Self>> {
        let seasons = sqlx::query_as::<_, LeagueSeason>(
            "SELECT id, name, created FROM league_season ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
        .context("failed to list league seasons")?;

        Ok(seasons)
    }
}
