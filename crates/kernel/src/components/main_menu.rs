//! Main menu component: rankings, game recording, and season overview.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::info;

use super::section;
use crate::action::{ActionContext, ActionResult, Component};
use crate::db::Db;
use crate::models::{Game, LeagueSeason, Player, RankingRow, game};
use crate::nav::Console;

/// Main menu business operations.
#[derive(Debug, Default)]
pub struct MainMenuService;

const METHODS: &[&str] = &["show_ranking_table", "record_game", "show_league_seasons"];

const NO_SEASON: &str = "No league season yet. Create one under Management first.";

#[async_trait]
impl Component for MainMenuService {
    fn name(&self) -> &'static str {
        "main_menu"
    }

    fn methods(&self) -> &'static [&'static str] {
        METHODS
    }

    async fn call(&self, method: &str, ctx: ActionContext<'_>) -> Result<ActionResult> {
        match method {
            "show_ranking_table" => self.show_ranking_table(ctx).await,
            "record_game" => self.record_game(ctx).await,
            "show_league_seasons" => self.show_league_seasons(ctx).await,
            other => bail!("main_menu has no handler for '{other}'"),
        }
    }
}

impl MainMenuService {
    async fn show_ranking_table(&self, ctx: ActionContext<'_>) -> Result<ActionResult> {
        let highlight = ctx.opt_i64("player_id")?;
        print_ranking(ctx.console, ctx.db, highlight).await?;
        Ok(ActionResult::Stay)
    }

    async fn record_game(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        let Some(season) = LeagueSeason::latest(ctx.db).await? else {
            ctx.say(NO_SEASON)?;
            return Ok(ActionResult::Stay);
        };

        let players = Player::list(ctx.db).await?;
        if players.len() < 2 {
            ctx.say("At least two players are needed to record a game.")?;
            return Ok(ActionResult::Stay);
        }

        let nicknames: Vec<&str> = players.iter().map(|p| p.nickname.as_str()).collect();
        ctx.say(&format!("Season: {}", season.name))?;
        ctx.say(&format!("Players: {}", nicknames.join(", ")))?;
        ctx.say("Leave blank to cancel.")?;

        let Some(winner) = ask_player(ctx.console, ctx.db, "Winner nickname: ", None).await? else {
            ctx.say("Game not recorded.")?;
            return Ok(ActionResult::Stay);
        };
        let Some(loser) =
            ask_player(ctx.console, ctx.db, "Loser nickname: ", Some(winner.id)).await?
        else {
            ctx.say("Game not recorded.")?;
            return Ok(ActionResult::Stay);
        };

        let game = Game::record(ctx.db, season.id, winner.id, loser.id).await?;
        info!(game = game.id, season = season.id, winner = %winner.nickname, loser = %loser.nickname, "game recorded");

        ctx.say(&format!(
            "Game recorded in season {}: {} beat {}.",
            season.name, winner.nickname, loser.nickname
        ))?;
        Ok(ActionResult::Stay)
    }

    async fn show_league_seasons(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        let seasons = LeagueSeason::list(ctx.db).await?;
        if seasons.is_empty() {
            ctx.say(NO_SEASON)?;
            return Ok(ActionResult::Stay);
        }

        section(ctx.console, "League seasons:")?;
        let current = seasons.last().map(|s| s.id);
        for season in &seasons {
            let games = Game::count_in_season(ctx.db, season.id).await?;
            let marker = if Some(season.id) == current { " (current)" } else { "" };
            ctx.say(&format!("{} - {games} game(s){marker}", season.name))?;
        }
        Ok(ActionResult::Stay)
    }
}

/// Ask for a player by nickname until a known one is given.
///
/// Blank input or end of input cancels.
async fn ask_player(
    console: &mut dyn Console,
    db: &Db,
    label: &str,
    exclude: Option<i64>,
) -> Result<Option<Player>> {
    loop {
        let Some(answer) = console.prompt(label)? else {
            return Ok(None);
        };
        let nickname = answer.trim();
        if nickname.is_empty() {
            return Ok(None);
        }

        match Player::find_by_nickname(db, nickname).await? {
            Some(player) if Some(player.id) == exclude => {
                console.println("Pick a different player.")?;
            }
            Some(player) => return Ok(Some(player)),
            None => console.println(&format!("No player named '{nickname}'."))?,
        }
    }
}

/// Print the ranking of the current season, marking `highlight`.
pub(crate) async fn print_ranking(
    console: &mut dyn Console,
    db: &Db,
    highlight: Option<i64>,
) -> Result<()> {
    let Some(season) = LeagueSeason::latest(db).await? else {
        console.println(NO_SEASON)?;
        return Ok(());
    };

    let rows = game::ranking(db, season.id).await?;
    for line in render_ranking(&season.name, &rows, highlight) {
        console.println(&line)?;
    }
    Ok(())
}

/// Format a ranking table. The highlighted player's row starts with `*`.
pub fn render_ranking(season: &str, rows: &[RankingRow], highlight: Option<i64>) -> Vec<String> {
    let mut lines = vec![format!("Season: {season}")];
    if rows.is_empty() {
        lines.push("No games played yet.".to_string());
        return lines;
    }

    lines.push(format!(
        "  {:>3} | {:<20} | {:>5} | {:>4} | {:>6}",
        "#", "Player", "Games", "Wins", "Points"
    ));
    for (i, row) in rows.iter().enumerate() {
        let marker = if Some(row.player_id) == highlight { '*' } else { ' ' };
        lines.push(format!(
            "{marker} {:>3} | {:<20} | {:>5} | {:>4} | {:>6}",
            i + 1,
            row.nickname,
            row.games,
            row.wins,
            row.points
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(player_id: i64, nickname: &str, games: i64, wins: i64, points: i64) -> RankingRow {
        RankingRow {
            player_id,
            nickname: nickname.to_string(),
            games,
            wins,
            points,
        }
    }

    #[test]
    fn ranking_marks_highlighted_player() {
        let rows = [row(1, "ace", 2, 2, 4), row(2, "bob", 2, 0, 2)];
        let lines = render_ranking("Spring", &rows, Some(2));

        assert_eq!(lines[0], "Season: Spring");
        assert!(lines[1].contains("Player"));
        assert!(lines[2].starts_with("    1 | ace"));
        assert!(lines[3].starts_with("*   2 | bob"));
        assert!(lines[3].ends_with("|      2"));
    }

    #[test]
    fn ranking_without_games() {
        assert_eq!(
            render_ranking("Spring", &[], None),
            vec!["Season: Spring", "No games played yet."]
        );
    }
}
