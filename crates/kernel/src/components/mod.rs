//! Business components reachable from the menu.
//!
//! | Key          | Operations                                                   |
//! |--------------|--------------------------------------------------------------|
//! | `management` | player list/details/create/delete, new league season         |
//! | `main_menu`  | ranking table, record game, league seasons                   |
//! | `utility`    | previous menu, parent menu, exit                             |

mod chart;
mod main_menu;
mod management;
pub mod player_form;
mod utility;

use std::io;

pub use chart::bar_chart;
pub use main_menu::{MainMenuService, render_ranking};
pub use management::ManagementService;
pub use utility::UtilityService;

use crate::action::ActionRegistry;
use crate::nav::Console;

/// Registry with every league component.
pub fn registry() -> ActionRegistry {
    ActionRegistry::new()
        .with(ManagementService)
        .with(MainMenuService)
        .with(UtilityService)
}

/// Print a titled section separator.
fn section(console: &mut dyn Console, title: &str) -> io::Result<()> {
    let rule = "-".repeat(50);
    console.println(&rule)?;
    console.println(title)?;
    console.println(&rule)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::load_tree;

    #[test]
    fn default_tree_resolves_against_registry() {
        let root = load_tree(None).unwrap();
        registry().validate(&root).unwrap();
    }

    #[test]
    fn registry_has_all_components() {
        assert_eq!(
            registry().component_names(),
            vec!["main_menu", "management", "utility"]
        );
    }
}
