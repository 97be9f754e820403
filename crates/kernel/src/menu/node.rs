//! Menu nodes - the entries of the navigation tree.
//!
//! A node is either pure navigation (it only has children) or carries an
//! [`ActionRef`] naming a business operation. Ids are positional selectors:
//! within one children list they are contiguous and start at 0.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named arguments bound to a node and passed to its action.
pub type BoundArgs = serde_json::Map<String, Value>;

/// Reference to a business operation: component key plus method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    /// Registry key of the component (e.g., "management").
    pub component: String,
    /// Method exposed by that component (e.g., "show_player_list").
    pub method: String,
}

impl ActionRef {
    pub fn new(component: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.method)
    }
}

/// A node of the navigation tree, static or produced by an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Positional selector shown to the user.
    #[serde(default)]
    pub id: usize,

    /// Display text.
    pub label: String,

    /// Business operation invoked on selection (None = pure navigation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionRef>,

    /// Arguments passed to the action.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub bound_args: BoundArgs,

    /// Ordered children, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a pure navigation node with no children.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: 0,
            label: label.into(),
            action: None,
            bound_args: BoundArgs::new(),
            children: Vec::new(),
        }
    }

    /// Attach an action reference.
    pub fn with_action(mut self, component: impl Into<String>, method: impl Into<String>) -> Self {
        self.action = Some(ActionRef::new(component, method));
        self
    }

    /// Bind a named argument for the action.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bound_args.insert(name.into(), value.into());
        self
    }

    /// Set the children, assigning ids by position.
    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self.renumber();
        self
    }

    /// Re-assign ids by position, recursively.
    pub fn renumber(&mut self) {
        renumber_list(&mut self.children);
    }

    /// Whether this node only navigates (no action attached).
    pub fn is_navigation(&self) -> bool {
        self.action.is_none()
    }

    /// Child with the given positional id.
    pub fn child(&self, id: usize) -> Option<&MenuNode> {
        self.children.get(id)
    }
}

/// Re-assign ids of a sibling list (and everything below it) by position.
pub fn renumber_list(nodes: &mut [MenuNode]) {
    for (i, node) in nodes.iter_mut().enumerate() {
        node.id = i;
        node.renumber();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn with_children_assigns_contiguous_ids() {
        let node = MenuNode::new("Root").with_children(vec![
            MenuNode::new("A"),
            MenuNode::new("B").with_children(vec![MenuNode::new("B1"), MenuNode::new("B2")]),
            MenuNode::new("C"),
        ]);

        let ids: Vec<usize> = node.children.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(node.child(1).unwrap().child(1).unwrap().label, "B2");
        assert_eq!(node.child(1).unwrap().child(1).unwrap().id, 1);
    }

    #[test]
    fn renumber_fixes_stale_ids() {
        let mut nodes = vec![MenuNode::new("A"), MenuNode::new("B")];
        nodes[0].id = 7;
        nodes[1].id = 7;
        renumber_list(&mut nodes);
        assert_eq!(nodes[0].id, 0);
        assert_eq!(nodes[1].id, 1);
    }

    #[test]
    fn action_and_args() {
        let node = MenuNode::new("Alice")
            .with_action("management", "show_player_details")
            .with_arg("player_id", 3);

        assert!(!node.is_navigation());
        assert_eq!(
            node.action.as_ref().unwrap().to_string(),
            "management.show_player_details"
        );
        assert_eq!(node.bound_args.get("player_id"), Some(&Value::from(3)));
        assert!(MenuNode::new("Main").is_navigation());
    }
}
