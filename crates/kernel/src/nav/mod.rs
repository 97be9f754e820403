//! Console navigation: input parsing, console I/O, and the menu engine.

mod console;
mod engine;
mod selection;

pub use console::{Console, LineConsole};
pub use engine::{Navigator, RETRY_NOTICE, Screen};
pub use selection::parse_selection;
