//! Management component: player records and league seasons.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::{debug, info};

use super::chart::bar_chart;
use super::main_menu::print_ranking;
use super::player_form::{self, MAX_TEXT_LEN, PlayerField, ValidationError};
use super::section;
use crate::action::{ActionContext, ActionResult, Component};
use crate::db::Db;
use crate::menu::MenuNode;
use crate::models::{CreatePlayer, LeagueSeason, Player, game};
use crate::nav::Console;

/// Player and season management operations.
#[derive(Debug, Default)]
pub struct ManagementService;

const METHODS: &[&str] = &[
    "show_player_list",
    "show_player_details",
    "player_create",
    "player_delete",
    "create_new_league_season",
];

#[async_trait]
impl Component for ManagementService {
    fn name(&self) -> &'static str {
        "management"
    }

    fn methods(&self) -> &'static [&'static str] {
        METHODS
    }

    async fn call(&self, method: &str, ctx: ActionContext<'_>) -> Result<ActionResult> {
        match method {
            "show_player_list" => self.show_player_list(ctx).await,
            "show_player_details" => self.show_player_details(ctx).await,
            "player_create" => self.player_create(ctx).await,
            "player_delete" => self.player_delete(ctx).await,
            "create_new_league_season" => self.create_new_league_season(ctx).await,
            other => bail!("management has no handler for '{other}'"),
        }
    }
}

impl ManagementService {
    /// One node per player, each bound to the destination operation, plus a
    /// trailing "Previous" entry.
    async fn show_player_list(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        let component = ctx.arg_str("destination_component")?;
        let method = ctx.arg_str("destination_method")?;
        let players = Player::list(ctx.db).await?;

        if players.is_empty() {
            ctx.say("No players yet.")?;
        }

        let mut items: Vec<MenuNode> = players
            .iter()
            .map(|p| {
                MenuNode::new(&p.nickname)
                    .with_action(component, method)
                    .with_arg("player_id", p.id)
            })
            .collect();
        items.push(MenuNode::new("Previous").with_action("utility", "previous_menu_item"));

        debug!(players = players.len(), destination = %format!("{component}.{method}"), "player list built");
        Ok(ActionResult::dynamic(items))
    }

    async fn show_player_details(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        let player_id = ctx.arg_i64("player_id")?;
        let Some(player) = Player::find_by_id(ctx.db, player_id).await? else {
            ctx.say("This player no longer exists.")?;
            return Ok(ActionResult::Stay);
        };

        section(ctx.console, "Player detail:")?;
        for line in detail_lines(&player) {
            ctx.say(&line)?;
        }

        section(ctx.console, "Ranking table:")?;
        print_ranking(ctx.console, ctx.db, Some(player.id)).await?;

        if let Some(season) = LeagueSeason::latest(ctx.db).await? {
            let growth = game::point_growth(ctx.db, season.id, player.id).await?;
            if !growth.is_empty() {
                section(ctx.console, "Points growth dynamics:")?;
                for line in bar_chart(&growth) {
                    ctx.say(&line)?;
                }
            }
        }

        Ok(ActionResult::Stay)
    }

    async fn player_create(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        ctx.say("Fields marked with * are required.")?;

        let Some(input) = fill_player_form(ctx.console, ctx.db).await? else {
            ctx.say("Player creation cancelled.")?;
            return Ok(ActionResult::Stay);
        };

        let player = Player::create(ctx.db, input).await?;
        info!(player = player.id, nickname = %player.nickname, "player created");

        match player.full_name() {
            Some(name) => ctx.say(&format!("Player {name} has been created with attributes:"))?,
            None => ctx.say("Player has been created with attributes:")?,
        }
        for line in attribute_lines(&player) {
            ctx.say(&line)?;
        }
        Ok(ActionResult::Stay)
    }

    async fn player_delete(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        let player_id = ctx.arg_i64("player_id")?;
        let label = ctx.node.label.clone();

        if Player::delete(ctx.db, player_id).await? {
            info!(player = player_id, nickname = %label, "player deleted");
            ctx.say(&format!("Player {label} has been deleted."))?;
        } else {
            ctx.say(&format!("Player {label} no longer exists."))?;
        }
        Ok(ActionResult::Stay)
    }

    async fn create_new_league_season(&self, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        loop {
            let Some(answer) = ctx.console.prompt("Enter new league season name: ")? else {
                ctx.say("League season not created.")?;
                return Ok(ActionResult::Stay);
            };
            let name = answer.trim();

            if name.is_empty() {
                ctx.say(&ValidationError::Required { field: "Season name" }.to_string())?;
            } else if name.chars().count() > MAX_TEXT_LEN {
                ctx.say(
                    &ValidationError::TooLong {
                        field: "Season name",
                        max: MAX_TEXT_LEN,
                    }
                    .to_string(),
                )?;
            } else {
                let season = LeagueSeason::create(ctx.db, name).await?;
                info!(season = season.id, name = %season.name, "league season created");
                ctx.say(&format!("New league season {} was created.", season.name))?;
                return Ok(ActionResult::Stay);
            }
        }
    }
}

/// Ask every form field in order, re-asking a field until it validates.
///
/// Returns `None` when input ends before the form is complete.
async fn fill_player_form(console: &mut dyn Console, db: &Db) -> Result<Option<CreatePlayer>> {
    let mut input = CreatePlayer::default();

    for field in PlayerField::ALL {
        loop {
            let Some(answer) = console.prompt(&field.prompt())? else {
                return Ok(None);
            };

            let outcome = match player_form::apply(&mut input, field, &answer) {
                Ok(()) if field == PlayerField::Nickname => {
                    match Player::find_by_nickname(db, &input.nickname).await? {
                        Some(_) => Err(ValidationError::NicknameTaken(input.nickname.clone())),
                        None => Ok(()),
                    }
                }
                other => other,
            };

            match outcome {
                Ok(()) => break,
                Err(e) => {
                    debug!(field = field.label(), error = %e, "form field rejected");
                    console.println(&e.to_string())?;
                }
            }
        }
    }

    Ok(Some(input))
}

/// Description of a player; only filled fields are shown.
fn detail_lines(player: &Player) -> Vec<String> {
    let mut lines = vec!["Only completed fields are displayed.".to_string()];
    if let Some(name) = player.full_name() {
        lines.push(format!("Detail of player {name}:"));
    }
    lines.extend(attribute_lines(player));
    lines
}

fn attribute_lines(player: &Player) -> Vec<String> {
    let mut lines = vec![format!("Nickname: {}", player.nickname)];
    if let Some(age) = player.age {
        lines.push(format!("Age: {age} years old"));
    }
    if let Some(email) = &player.email {
        lines.push(format!("Email: {email}"));
    }
    lines
}
