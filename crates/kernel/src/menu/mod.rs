//! Menu tree for console navigation.
//!
//! The static tree is loaded once at startup and never mutated. Actions may
//! produce dynamic node lists at run time; those live only on the screen that
//! shows them.

mod node;
mod tree;

pub use node::{ActionRef, BoundArgs, MenuNode, renumber_list};
pub use tree::{DEFAULT_MENU, load_tree, parse_tree, render_tree};
