//! Action registry - maps component keys to live business components.
//!
//! Menu nodes name their operation as `(component, method)`. The registry
//! turns that pair into a callable bound to the registered component.
//! Unknown components or methods are configuration bugs and surface as fatal
//! [`NavError`]s, never as a retry prompt.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error};

use super::{ActionContext, ActionResult};
use crate::error::{NavError, NavResult};
use crate::menu::{ActionRef, MenuNode};

/// A business component exposing named operations to the menu.
#[async_trait]
pub trait Component: Send + Sync {
    /// Registry key (matched against `ActionRef::component`).
    fn name(&self) -> &'static str;

    /// Names of the operations `call` accepts.
    fn methods(&self) -> &'static [&'static str];

    /// Run one operation.
    async fn call(&self, method: &str, ctx: ActionContext<'_>) -> Result<ActionResult>;
}

/// Registry of business components, keyed by name.
#[derive(Default)]
pub struct ActionRegistry {
    components: HashMap<&'static str, Arc<dyn Component>>,
}

/// An action reference resolved against the registry.
pub struct BoundAction<'r> {
    component: &'r dyn Component,
    method: &'r str,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component. A later registration under the same name wins.
    pub fn register(&mut self, component: impl Component + 'static) {
        let name = component.name();
        if self.components.insert(name, Arc::new(component)).is_some() {
            debug!(component = name, "component re-registered");
        }
    }

    /// Builder-style [`Self::register`].
    pub fn with(mut self, component: impl Component + 'static) -> Self {
        self.register(component);
        self
    }

    /// Resolve the action of `node`.
    ///
    /// Fails with `ComponentNotFound` / `MethodNotFound` when the reference
    /// does not match a registered operation.
    pub fn resolve<'r>(&'r self, action: &'r ActionRef, node: &MenuNode) -> NavResult<BoundAction<'r>> {
        let component = self
            .components
            .get(action.component.as_str())
            .ok_or_else(|| NavError::component_not_found(&action.component, &node.label))?;

        if !component.methods().contains(&action.method.as_str()) {
            return Err(NavError::method_not_found(
                &action.component,
                &action.method,
                &node.label,
                component.methods(),
            ));
        }

        Ok(BoundAction {
            component: component.as_ref(),
            method: &action.method,
        })
    }

    /// Check every action reference of a static tree.
    pub fn validate(&self, root: &MenuNode) -> NavResult<()> {
        let mut pending = vec![root];
        let mut checked = 0usize;

        while let Some(node) = pending.pop() {
            if let Some(action) = &node.action {
                self.resolve(action, node)?;
                checked += 1;
            }
            pending.extend(node.children.iter());
        }

        debug!(actions = checked, "menu actions validated");
        Ok(())
    }

    /// Registered component names, sorted.
    pub fn component_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.components.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl BoundAction<'_> {
    /// Invoke the operation with the given context.
    pub async fn invoke(&self, ctx: ActionContext<'_>) -> NavResult<ActionResult> {
        let component = self.component.name();
        debug!(component, method = self.method, node = %ctx.node.label, "invoking action");

        self.component
            .call(self.method, ctx)
            .await
            .map_err(|source| {
                error!(component, method = self.method, error = %source, "action failed");
                NavError::ActionFailed {
                    action: format!("{component}.{}", self.method),
                    source,
                }
            })
    }
}
