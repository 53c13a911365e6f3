//! Authorization denial errors.
//!
//! Two domain errors cover every denial this crate can produce. Both carry
//! enough structure for a boundary layer to render a precise client-facing
//! message, and neither is ever used for flow control. Verification
//! failures are a different thing entirely — see
//! [`VerifyError`](crate::VerifyError).

use std::fmt;

use thiserror::Error;

/// The unsatisfied requirement behind a [`AuthError::MissingScope`] denial.
///
/// Either list may be empty; rendering omits the empty clause. Multiple
/// entries in a list are alternatives ("a, b, or c").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Required {
    /// Global scopes that would have satisfied the check.
    pub global: Vec<String>,
    /// Event permission levels that would have satisfied the check.
    pub event: Vec<String>,
}

impl Required {
    /// Requirement satisfied by any of the given global scopes.
    pub fn global(scopes: &[&str]) -> Self {
        Self {
            global: scopes.iter().map(|s| s.to_string()).collect(),
            event: Vec::new(),
        }
    }

    /// Requirement satisfied by any of the given event permission levels.
    pub fn event(permissions: &[&str]) -> Self {
        Self {
            global: Vec::new(),
            event: permissions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Requirement satisfied by a global scope or an event permission.
    pub fn either(scope: &str, event_permission: &str) -> Self {
        Self {
            global: vec![scope.to_string()],
            event: vec![event_permission.to_string()],
        }
    }
}

/// Joins alternatives as "a", "a or b", "a, b, or c".
fn alternatives(values: &[String]) -> String {
    match values {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

impl fmt::Display for Required {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let global = (!self.global.is_empty())
            .then(|| format!("the {} global scope", alternatives(&self.global)));
        let event = (!self.event.is_empty())
            .then(|| format!("the {} event permission", alternatives(&self.event)));

        match (global, event) {
            (Some(g), Some(e)) => write!(f, "requires {g} or {e}"),
            (Some(g), None) => write!(f, "requires {g}"),
            (None, Some(e)) => write!(f, "requires {e}"),
            (None, None) => write!(f, "requires a permission that was not granted"),
        }
    }
}

/// An authorization denial from a `require_*` check.
///
/// # Examples
///
/// ```
/// use authz_core::{AuthContext, AuthError};
///
/// let ctx = AuthContext::anonymous();
/// let err = ctx.require_scope(&["admin"]).unwrap_err();
///
/// assert!(matches!(err, AuthError::MissingScope(_)));
/// assert_eq!(err.to_string(), "missing permission: requires the admin global scope");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A permission check failed; the payload names what would have passed.
    #[error("missing permission: {0}")]
    MissingScope(Required),

    /// An authenticated principal was required and none exists.
    #[error("you must be logged in")]
    MustLogIn,
}
