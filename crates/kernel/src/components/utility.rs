//! Navigation helpers exposed as actions.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::debug;

use crate::action::{ActionContext, ActionResult, Component, NodeRef};

/// Generic navigation operations usable from any menu.
#[derive(Debug, Default)]
pub struct UtilityService;

const METHODS: &[&str] = &["previous_menu_item", "parent_menu", "exit"];

#[async_trait]
impl Component for UtilityService {
    fn name(&self) -> &'static str {
        "utility"
    }

    fn methods(&self) -> &'static [&'static str] {
        METHODS
    }

    async fn call(&self, method: &str, mut ctx: ActionContext<'_>) -> Result<ActionResult> {
        match method {
            // Back to the menu the current list was opened from.
            "previous_menu_item" => {
                debug!(menu = %ctx.caller.label, "returning to menu");
                Ok(ActionResult::Stay)
            }
            // One level above the menu on screen.
            "parent_menu" => Ok(ActionResult::RedirectTo(
                ctx.ancestor(1).unwrap_or(NodeRef::ROOT),
            )),
            "exit" => {
                ctx.say("Goodbye.")?;
                Ok(ActionResult::Exit)
            }
            other => bail!("utility has no handler for '{other}'"),
        }
    }
}
