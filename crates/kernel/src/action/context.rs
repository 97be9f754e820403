//! Invocation context and result contract for business actions.

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::db::Db;
use crate::menu::{BoundArgs, MenuNode, renumber_list};
use crate::nav::Console;

/// Position of a node on the navigation stack (0 = root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeRef(pub usize);

impl NodeRef {
    /// The tree root.
    pub const ROOT: NodeRef = NodeRef(0);

    pub fn depth(self) -> usize {
        self.0
    }
}

/// How navigation continues after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// Remain at this level: the selected node's children, or its parent's.
    Stay,
    /// Show a freshly built node list, attached under the caller.
    ShowDynamic(Vec<MenuNode>),
    /// Jump to the children of a node further up the stack.
    RedirectTo(NodeRef),
    /// Leave the navigation loop.
    Exit,
}

impl ActionResult {
    /// Dynamic list with ids re-assigned by position.
    pub fn dynamic(mut items: Vec<MenuNode>) -> Self {
        renumber_list(&mut items);
        Self::ShowDynamic(items)
    }
}

/// Everything an action may touch during one invocation.
///
/// The caller is the parent of the selected node, i.e. the menu the user was
/// looking at. Persistence and console are passed in explicitly.
pub struct ActionContext<'a> {
    /// The node the user selected.
    pub node: &'a MenuNode,
    /// The node whose children were on screen.
    pub caller: &'a MenuNode,
    /// Console shared with the engine.
    pub console: &'a mut dyn Console,
    /// Database handle.
    pub db: &'a Db,
    caller_ref: NodeRef,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        node: &'a MenuNode,
        caller: &'a MenuNode,
        caller_ref: NodeRef,
        console: &'a mut dyn Console,
        db: &'a Db,
    ) -> Self {
        Self {
            node,
            caller,
            console,
            db,
            caller_ref,
        }
    }

    /// Stack position `levels` above the caller, if the stack is that deep.
    pub fn ancestor(&self, levels: usize) -> Option<NodeRef> {
        self.caller_ref.0.checked_sub(levels).map(NodeRef)
    }

    /// Arguments bound to the selected node.
    pub fn args(&self) -> &BoundArgs {
        &self.node.bound_args
    }

    /// Required integer argument.
    pub fn arg_i64(&self, name: &str) -> Result<i64> {
        self.opt_i64(name)?
            .with_context(|| format!("missing argument '{name}' on '{}'", self.node.label))
    }

    /// Optional integer argument; present but non-integer is an error.
    pub fn opt_i64(&self, name: &str) -> Result<Option<i64>> {
        match self.args().get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .with_context(|| format!("argument '{name}' must be an integer, got {value}")),
        }
    }

    /// Required string argument.
    pub fn arg_str(&self, name: &str) -> Result<&'a str> {
        let node: &'a MenuNode = self.node;
        node.bound_args
            .get(name)
            .and_then(Value::as_str)
            .with_context(|| format!("missing string argument '{name}' on '{}'", node.label))
    }

    /// Write a line to the console.
    pub fn say(&mut self, line: &str) -> std::io::Result<()> {
        self.console.println(line)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::nav::LineConsole;

    fn lazy_db() -> Db {
        sqlx::sqlite::SqlitePoolOptions::new()
            .connect_lazy("sqlite::memory:")
            .unwrap()
    }

    #[tokio::test]
    async fn argument_helpers() {
        let db = lazy_db();
        let caller = MenuNode::new("Management");
        let node = MenuNode::new("Alice")
            .with_arg("player_id", 4)
            .with_arg("destination_method", "show_player_details")
            .with_arg("bad", "x");
        let mut console = LineConsole::new(Cursor::new(Vec::new()), Vec::new());
        let ctx = ActionContext::new(&node, &caller, NodeRef(2), &mut console, &db);

        assert_eq!(ctx.arg_i64("player_id").unwrap(), 4);
        assert_eq!(ctx.opt_i64("absent").unwrap(), None);
        assert!(ctx.opt_i64("bad").is_err());
        assert!(ctx.arg_i64("absent").unwrap_err().to_string().contains("Alice"));
        assert_eq!(
            ctx.arg_str("destination_method").unwrap(),
            "show_player_details"
        );
        assert_eq!(ctx.caller.label, "Management");
        assert_eq!(ctx.ancestor(0), Some(NodeRef(2)));
        assert_eq!(ctx.ancestor(2), Some(NodeRef::ROOT));
        assert_eq!(ctx.ancestor(3), None);
    }

    #[test]
    fn dynamic_renumbers() {
        let mut a = MenuNode::new("A");
        a.id = 5;
        let result = ActionResult::dynamic(vec![a, MenuNode::new("B")]);
        let ActionResult::ShowDynamic(items) = result else {
            panic!("expected dynamic result");
        };
        assert_eq!(items[0].id, 0);
        assert_eq!(items[1].id, 1);
    }
}
