//! Business action dispatch.
//!
//! Components register named operations; menu nodes reference them by
//! `(component, method)`. Each invocation receives an [`ActionContext`] and
//! answers with an [`ActionResult`] telling the engine where to go next.

mod context;
mod registry;

pub use context::{ActionContext, ActionResult, NodeRef};
pub use registry::{ActionRegistry, BoundAction, Component};
