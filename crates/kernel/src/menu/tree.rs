//! Static menu tree loading.
//!
//! The tree is described in TOML: a root table with nested `[[children]]`
//! arrays. A copy of the default tree is compiled into the binary so the
//! console runs without any file on disk.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::MenuNode;

/// Default tree shipped with the binary.
pub const DEFAULT_MENU: &str = include_str!("../../menu.toml");

/// Load the static tree from `path`, or the embedded default when `None`.
pub fn load_tree(path: Option<&Path>) -> Result<MenuNode> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read menu file: {}", path.display()))?;
            parse_tree(&content)
                .with_context(|| format!("invalid menu file: {}", path.display()))
        }
        None => parse_tree(DEFAULT_MENU).context("invalid embedded menu"),
    }
}

/// Parse a tree from a TOML string and assign positional ids.
pub fn parse_tree(content: &str) -> Result<MenuNode> {
    let mut root: MenuNode = toml::from_str(content).context("failed to parse menu TOML")?;
    root.renumber();

    if root.children.is_empty() {
        bail!("menu root '{}' has no entries", root.label);
    }

    debug!(root = %root.label, entries = root.children.len(), "menu tree loaded");
    Ok(root)
}

/// Indented outline of the tree, one line per node.
pub fn render_tree(root: &MenuNode) -> Vec<String> {
    let mut lines = vec![root.label.clone()];
    outline(&root.children, 1, &mut lines);
    lines
}

fn outline(nodes: &[MenuNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        match &node.action {
            Some(action) => lines.push(format!("{indent}{} | {} -> {action}", node.id, node.label)),
            None => lines.push(format!("{indent}{} | {}", node.id, node.label)),
        }
        outline(&node.children, depth + 1, lines);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn default_tree_parses() {
        let root = load_tree(None).unwrap();
        assert_eq!(root.label, "League");

        let labels: Vec<&str> = root.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Main menu", "Management", "Exit"]);

        let management = root.child(1).unwrap();
        assert!(management.is_navigation());
        let list = management.child(1).unwrap();
        assert_eq!(list.id, 1);
        assert_eq!(
            list.bound_args
                .get("destination_method")
                .and_then(|v| v.as_str()),
            Some("show_player_details")
        );
    }

    #[test]
    fn ids_follow_position() {
        let root = parse_tree(
            r#"
            label = "Root"

            [[children]]
            id = 9
            label = "First"

            [[children]]
            id = 9
            label = "Second"
            action = { component = "utility", method = "exit" }
            "#,
        )
        .unwrap();

        assert_eq!(root.children[0].id, 0);
        assert_eq!(root.children[1].id, 1);
        assert_eq!(root.children[1].action.as_ref().unwrap().method, "exit");
    }

    #[test]
    fn empty_root_rejected() {
        let err = parse_tree(r#"label = "Nothing""#).unwrap_err();
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_tree(Some(Path::new("/nonexistent/menu.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/menu.toml"));
    }

    #[test]
    fn outline_shows_actions() {
        let root = MenuNode::new("Root").with_children(vec![
            MenuNode::new("Nav").with_children(vec![MenuNode::new("Leaf").with_action("c", "m")]),
        ]);
        assert_eq!(
            render_tree(&root),
            vec!["Root", "  0 | Nav", "    0 | Leaf -> c.m"]
        );
    }
}
