//! Navigation engine - the render / select / dispatch loop.
//!
//! The engine keeps an explicit stack of entered nodes (`path[0]` is the
//! root) and the screen currently shown. A screen always belongs to one node
//! on that stack; selecting from it truncates the stack back to that owner
//! before pushing the chosen node, so "parent" is a stack position rather
//! than a pointer.
//!
//! After an action, navigation continues with the first of:
//! 1. the dynamic items it returned (shown under the caller),
//! 2. the node it redirected to,
//! 3. the selected node's own children,
//! 4. the caller's children.
//!
//! An empty screen falls back to the root's children, so there is always
//! something to choose from.

use tracing::{debug, info, warn};

use super::{Console, parse_selection};
use crate::action::{ActionContext, ActionRegistry, ActionResult, NodeRef};
use crate::db::Db;
use crate::error::{NavError, NavResult};
use crate::menu::{MenuNode, renumber_list};

/// Shown after a malformed or out-of-range selection.
pub const RETRY_NOTICE: &str = "Wrong choice, try again:";

/// Nodes currently offered to the user and the stack node they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub owner: NodeRef,
    pub items: Vec<MenuNode>,
}

/// Interactive menu state machine.
pub struct Navigator<C> {
    registry: ActionRegistry,
    path: Vec<MenuNode>,
    console: C,
    db: Db,
}

impl<C: Console> Navigator<C> {
    /// Create a navigator positioned at the root.
    pub fn new(root: MenuNode, registry: ActionRegistry, db: Db, console: C) -> NavResult<Self> {
        if root.children.is_empty() {
            return Err(NavError::EmptyMenu { root: root.label });
        }

        Ok(Self {
            registry,
            path: vec![root],
            console,
            db,
        })
    }

    /// Run until the input is exhausted or an action asks to exit.
    ///
    /// Invalid selections re-prompt on the same screen. Configuration errors
    /// and failing actions end the loop with an error.
    pub async fn run(&mut self) -> NavResult<()> {
        info!(root = %self.path[0].label, "navigation started");
        let mut screen = self.screen_of(NodeRef::ROOT);

        loop {
            self.render(&screen)?;

            let Some(line) = self.console.read_line()? else {
                info!(depth = self.depth(), "input closed, leaving menu");
                return Ok(());
            };

            let Some(selected) = parse_selection(&line)
                .and_then(|i| screen.items.get(i))
                .cloned()
            else {
                debug!(input = %line, owner = screen.owner.depth(), "invalid selection");
                self.console.println(RETRY_NOTICE)?;
                continue;
            };

            self.console.clear()?;

            match self.dispatch(screen.owner, selected).await? {
                Some(next) => screen = next,
                None => {
                    info!(depth = self.depth(), "exit requested");
                    return Ok(());
                }
            }
        }
    }

    /// The node most recently entered.
    pub fn current(&self) -> &MenuNode {
        &self.path[self.path.len() - 1]
    }

    /// Depth of the current node (0 = root).
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// Labels along the navigation stack, root first.
    pub fn path_labels(&self) -> Vec<&str> {
        self.path.iter().map(|n| n.label.as_str()).collect()
    }

    /// Consume the navigator, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    fn render(&mut self, screen: &Screen) -> NavResult<()> {
        for item in &screen.items {
            self.console.println(&format!("{} | {}", item.id, item.label))?;
        }
        Ok(())
    }

    /// Enter `node`, selected from a screen owned by `owner`.
    ///
    /// Returns the next screen, or `None` when navigation should stop.
    async fn dispatch(&mut self, owner: NodeRef, node: MenuNode) -> NavResult<Option<Screen>> {
        self.path.truncate(owner.depth() + 1);
        self.path.push(node);

        let top = NodeRef(self.path.len() - 1);
        let current = &self.path[top.depth()];

        let Some(action) = &current.action else {
            debug!(node = %current.label, depth = top.depth(), "entering menu");
            return Ok(Some(self.screen_of(top)));
        };

        let bound = self.registry.resolve(action, current)?;
        let ctx = ActionContext::new(
            current,
            &self.path[owner.depth()],
            owner,
            &mut self.console,
            &self.db,
        );
        let result = bound.invoke(ctx).await?;

        Ok(self.continue_after(result))
    }

    fn continue_after(&self, result: ActionResult) -> Option<Screen> {
        let top = NodeRef(self.depth());
        let caller = NodeRef(top.depth().saturating_sub(1));

        match result {
            ActionResult::Exit => None,
            ActionResult::ShowDynamic(mut items) if !items.is_empty() => {
                renumber_list(&mut items);
                debug!(owner = caller.depth(), items = items.len(), "showing dynamic items");
                Some(Screen {
                    owner: caller,
                    items,
                })
            }
            ActionResult::RedirectTo(target) => {
                if target > top {
                    warn!(target = target.depth(), depth = top.depth(), "redirect beyond stack");
                }
                Some(self.screen_of(target.min(top)))
            }
            ActionResult::Stay | ActionResult::ShowDynamic(_) => {
                if self.path[top.depth()].children.is_empty() {
                    Some(self.screen_of(caller))
                } else {
                    Some(self.screen_of(top))
                }
            }
        }
    }

    /// Children of the stack node at `at`, falling back to the root's.
    fn screen_of(&self, at: NodeRef) -> Screen {
        let node = &self.path[at.depth()];
        if node.children.is_empty() {
            debug!(node = %node.label, "nothing to show, falling back to root");
            return Screen {
                owner: NodeRef::ROOT,
                items: self.path[0].children.clone(),
            };
        }

        Screen {
            owner: at,
            items: node.children.clone(),
        }
    }
}
