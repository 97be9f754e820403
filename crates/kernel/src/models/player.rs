//! Player model and CRUD operations.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::Db;

/// Player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Player {
    /// Unique identifier.
    pub id: i64,

    /// Optional given name.
    pub first_name: Option<String>,

    /// Optional family name.
    pub last_name: Option<String>,

    /// Optional contact address.
    pub email: Option<String>,

    /// Unique display name, used in menus and rankings.
    pub nickname: String,

    /// Age in years.
    pub age: Option<i64>,

    /// Unix timestamp when created.
    pub created: i64,
}

/// Input for creating a player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreatePlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub nickname: String,
    pub age: Option<i64>,
}

const COLUMNS: &str = "id, first_name, last_name, email, nickname, age, created";

impl Player {
    /// Create a new player.
    pub async fn create(pool: &Db, input: CreatePlayer) -> Result<Self> {
        let now = chrono::Utc::now().timestamp();

        let player = sqlx::query_as::<_, Player>(&format!(
            "INSERT INTO player (first_name, last_name, email, nickname, age, created) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.nickname)
        .bind(input.age)
        .bind(now)
        .fetch_one(pool)
        .await
        .with_context(|| format!("failed to create player '{}'", input.nickname))?;

        Ok(player)
    }

    /// Find a player by ID.
    pub async fn find_by_id(pool: &Db, id: i64) -> Result<Option<Self>> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {COLUMNS} FROM player WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch player by id")?;

        Ok(player)
    }

    /// Find a player by nickname (case-insensitive).
    pub async fn find_by_nickname(pool: &Db, nickname: &str) -> Result<Option<Self>> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {COLUMNS} FROM player WHERE nickname = ? COLLATE NOCASE"
        ))
        .bind(nickname)
        .fetch_optional(pool)
        .await
        .context("failed to fetch player by nickname")?;

        Ok(player)
    }

    /// List all players in creation order.
    pub async fn list(pool: &Db) -> Result<Vec<Self>> {
        let players = sqlx::query_as::<_, Player>(&format!(
            "SELECT {COLUMNS} FROM player ORDER BY id ASC"
        ))
        .fetch_all(pool)
        .await
        .context("failed to list players")?;

        Ok(players)
    }

    /// Delete a player and their game results.
    ///
    /// Returns false if no player had this id.
    pub async fn delete(pool: &Db, id: i64) -> Result<bool> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM game_result WHERE player_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("failed to delete player results")?;

        let result = sqlx::query("DELETE FROM player WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("failed to delete player")?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// "First Last" when either part is set.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (None, None) => None,
            (first, last) => Some(
                format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
                    .trim()
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn player(first: Option<&str>, last: Option<&str>) -> Player {
        Player {
            id: 1,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email: None,
            nickname: "ace".to_string(),
            age: None,
            created: 0,
        }
    }

    #[test]
    fn full_name_variants() {
        assert_eq!(player(None, None).full_name(), None);
        assert_eq!(
            player(Some("Ada"), Some("Lovelace")).full_name().as_deref(),
            Some("Ada Lovelace")
        );
        assert_eq!(player(None, Some("Hopper")).full_name().as_deref(), Some("Hopper"));
    }
}
