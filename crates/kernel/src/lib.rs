//! League Console Kernel
//!
//! Menu navigation engine, business components, and persistence for a small
//! recreational league. The interactive entry point is the `league` binary.

pub mod action;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod models;
pub mod nav;

pub use action::{ActionContext, ActionRegistry, ActionResult, Component, NodeRef};
pub use config::Config;
pub use error::{NavError, NavResult};
pub use menu::{ActionRef, MenuNode};
pub use nav::{Console, LineConsole, Navigator};
