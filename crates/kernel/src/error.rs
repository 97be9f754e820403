//! Navigation error types.
//!
//! Only fatal conditions live here. A malformed or out-of-range selection is
//! not an error: the engine re-prompts and carries on.

use thiserror::Error;

/// Errors that abort the navigation loop.
#[derive(Debug, Error)]
pub enum NavError {
    /// A node names a component that was never registered.
    #[error("component '{component}' is not registered (referenced by '{node}')")]
    ComponentNotFound { component: String, node: String },

    /// The component exists but does not expose the method.
    #[error(
        "component '{component}' has no method '{method}' (referenced by '{node}'). Available: {available}"
    )]
    MethodNotFound {
        component: String,
        method: String,
        node: String,
        available: String,
    },

    /// The business action itself failed (database, missing argument, ...).
    #[error("action '{action}' failed: {source}")]
    ActionFailed {
        action: String,
        #[source]
        source: anyhow::Error,
    },

    /// The tree has nothing to show at the top level.
    #[error("menu '{root}' has no entries")]
    EmptyMenu { root: String },

    /// Console read or write failure.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}

impl NavError {
    /// Create a component not found error.
    pub fn component_not_found(component: impl Into<String>, node: impl Into<String>) -> Self {
        Self::ComponentNotFound {
            component: component.into(),
            node: node.into(),
        }
    }

    /// Create a method not found error listing the component's methods.
    pub fn method_not_found(
        component: impl Into<String>,
        method: impl Into<String>,
        node: impl Into<String>,
        available: &[&str],
    ) -> Self {
        Self::MethodNotFound {
            component: component.into(),
            method: method.into(),
            node: node.into(),
            available: available.join(", "),
        }
    }

    /// Whether this error stems from a broken menu/registry configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ComponentNotFound { .. } | Self::MethodNotFound { .. } | Self::EmptyMenu { .. }
        )
    }
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;
