//! Games, results, and the statistics derived from them.
//!
//! Every game has one winner and one loser. A win is worth
//! [`WIN_POINTS`], a played loss [`LOSS_POINTS`].

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::Db;

/// Points awarded for a win.
pub const WIN_POINTS: i64 = 2;

/// Points awarded for playing and losing.
pub const LOSS_POINTS: i64 = 1;

/// Game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub league_season_id: i64,
    /// Unix timestamp when recorded.
    pub created: i64,
}

/// One row of a season ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RankingRow {
    pub player_id: i64,
    pub nickname: String,
    pub games: i64,
    pub wins: i64,
    pub points: i64,
}

impl Game {
    /// Record a finished game in a season.
    pub async fn record(pool: &Db, season_id: i64, winner_id: i64, loser_id: i64) -> Result<Self> {
        if winner_id == loser_id {
            bail!("a player cannot play against themselves");
        }

        let now = chrono::Utc::now().timestamp();
        let mut tx = pool.begin().await?;

        let game = sqlx::query_as::<_, Game>(
            "INSERT INTO game (league_season_id, created) VALUES (?, ?) \
             RETURNING id, league_season_id, created",
        )
        .bind(season_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .context("failed to create game")?;

        for (player_id, is_winner) in [(winner_id, true), (loser_id, false)] {
            sqlx::query("INSERT INTO game_result (game_id, player_id, is_winner) VALUES (?, ?, ?)")
                .bind(game.id)
                .bind(player_id)
                .bind(is_winner)
                .execute(&mut *tx)
                .await
                .context("failed to record game result")?;
        }

        tx.commit().await?;
        Ok(game)
    }

    /// Number of games played in a season.
    pub async fn count_in_season(pool: &Db, season_id: i64) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM game WHERE league_season_id = ?")
            .bind(season_id)
            .fetch_one(pool)
            .await
            .context("failed to count games")?;

        Ok(count)
    }
}

/// Ranking of a season: points descending, then nickname.
pub async fn ranking(pool: &Db, season_id: i64) -> Result<Vec<RankingRow>> {
    let rows = sqlx::query_as::<_, RankingRow>(
        r#"
        SELECT p.id AS player_id,
               p.nickname AS nickname,
               COUNT(gr.id) AS games,
               SUM(CASE WHEN gr.is_winner THEN 1 ELSE 0 END) AS wins,
               SUM(CASE WHEN gr.is_winner THEN ? ELSE ? END) AS points
        FROM game_result gr
        JOIN game g ON g.id = gr.game_id
        JOIN player p ON p.id = gr.player_id
        WHERE g.league_season_id = ?
        GROUP BY p.id, p.nickname
        ORDER BY points DESC, p.nickname ASC
        "#,
    )
    .bind(WIN_POINTS)
    .bind(LOSS_POINTS)
    .bind(season_id)
    .fetch_all(pool)
    .await
    .context("failed to compute ranking")?;

    Ok(rows)
}

/// Cumulative points of a player after each of their games in a season.
pub async fn point_growth(pool: &Db, season_id: i64, player_id: i64) -> Result<Vec<i64>> {
    let results: Vec<(bool,)> = sqlx::query_as(
        r#"
        SELECT gr.is_winner
        FROM game_result gr
        JOIN game g ON g.id = gr.game_id
        WHERE g.league_season_id = ? AND gr.player_id = ?
        ORDER BY gr.game_id ASC
        "#,
    )
    .bind(season_id)
    .bind(player_id)
    .fetch_all(pool)
    .await
    .context("failed to load player results")?;

    Ok(accumulate(results.into_iter().map(|(won,)| won)))
}

/// Running point total over a sequence of win/loss outcomes.
pub fn accumulate(outcomes: impl IntoIterator<Item = bool>) -> Vec<i64> {
    outcomes
        .into_iter()
        .scan(0, |total, won| {
            *total += if won { WIN_POINTS } else { LOSS_POINTS };
            Some(*total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_points() {
        assert_eq!(accumulate([true, false, true]), vec![2, 3, 5]);
        assert!(accumulate([]).is_empty());
    }
}
