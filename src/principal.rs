//! The per-request identity record and its pure permission queries.

use std::collections::{HashMap, HashSet};

/// Optional identity attributes carried by a verified token.
///
/// Every field is `None` for an anonymous principal. Which fields are
/// populated for an authenticated principal depends entirely on what the
/// identity provider put into the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// Stable subject identifier from the token (`sub`).
    pub user_id: Option<String>,
    /// Login/display username.
    pub username: Option<String>,
    /// Primary email address.
    pub email: Option<String>,
    /// Corporate email address, when distinct from the primary.
    pub corporate_email: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Preferred pronoun.
    pub pronoun: Option<String>,
}

/// The authenticated-or-anonymous identity derived from a request's token,
/// plus its granted scopes and event permissions.
///
/// A `Principal` is built once per inbound request and never mutated
/// afterwards. `scopes` and `events` are always present; both are empty for
/// an anonymous principal, and all `identity` fields are `None` in that
/// state.
///
/// # Examples
///
/// ```
/// use authz_core::Principal;
///
/// let anon = Principal::anonymous();
/// assert!(!anon.is_logged_in());
/// assert!(!anon.has_scope(&["admin"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    /// True iff a valid bearer token was present and verified.
    pub logged_in: bool,
    /// Identity attributes from the token; all `None` when anonymous.
    pub identity: Identity,
    /// Global permission scopes granted to the token.
    pub scopes: HashSet<String>,
    /// Event identifier → single permission level granted for that event.
    pub events: HashMap<String, String>,
}

impl Principal {
    /// Returns the anonymous principal: not logged in, no identity, no
    /// scopes, no event permissions.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns whether this principal was built from a verified token.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Returns true iff at least one of the given global scopes is granted.
    ///
    /// Multiple scopes have OR semantics: the check passes as soon as one
    /// member of `scopes` is in the principal's scope set. An empty slice is
    /// never satisfied.
    ///
    /// # Examples
    ///
    /// ```
    /// use authz_core::Principal;
    ///
    /// let mut p = Principal::anonymous();
    /// p.scopes.insert("admin".to_string());
    ///
    /// assert!(p.has_scope(&["admin"]));
    /// assert!(p.has_scope(&["viewer", "admin"]));
    /// assert!(!p.has_scope(&["viewer"]));
    /// ```
    pub fn has_scope(&self, scopes: &[&str]) -> bool {
        scopes.iter().any(|s| self.scopes.contains(*s))
    }

    /// Returns true iff any permission level is granted for `event_id`.
    ///
    /// Membership only: this does not check which permission level is held.
    pub fn has_event(&self, event_id: &str) -> bool {
        self.events.contains_key(event_id)
    }

    /// Returns true iff the permission level held for `event_id` equals any
    /// of the given values.
    ///
    /// False when the principal has no permission for the event at all.
    /// Levels are flat strings compared exactly; no level implies another
    /// ("organizer" does not satisfy a "volunteer" check).
    pub fn has_event_scope(&self, event_id: &str, permissions: &[&str]) -> bool {
        match self.events.get(event_id) {
            Some(held) => permissions.iter().any(|p| held == p),
            None => false,
        }
    }

    /// Returns true iff the global scope is granted OR the principal holds
    /// any permission for the event.
    ///
    /// Collapses the common "a global capability or mere event membership
    /// grants access" guard into one check.
    pub fn has_scope_or_event(&self, scope: &str, event_id: &str) -> bool {
        self.has_scope(&[scope]) || self.has_event(event_id)
    }

    /// Returns true iff the global scope is granted OR the principal holds
    /// the given permission level for the event.
    pub fn has_scope_or_event_scope(
        &self,
        scope: &str,
        event_id: &str,
        event_permission: &str,
    ) -> bool {
        self.has_scope(&[scope]) || self.has_event_scope(event_id, &[event_permission])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted() -> Principal {
        Principal {
            logged_in: true,
            identity: Identity {
                user_id: Some("user-1".to_string()),
                ..Identity::default()
            },
            scopes: ["admin"].into_iter().map(String::from).collect(),
            events: [("evt1", "organizer")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn anonymous_has_nothing() {
        let p = Principal::anonymous();

        assert!(!p.is_logged_in());
        assert!(p.scopes.is_empty());
        assert!(p.events.is_empty());
        assert_eq!(p.identity, Identity::default());
        assert!(!p.has_scope(&["admin"]));
        assert!(!p.has_event("evt1"));
        assert!(!p.has_event_scope("evt1", &["organizer"]));
    }

    #[test]
    fn scope_membership() {
        let p = granted();

        assert!(p.has_scope(&["admin"]));
        assert!(!p.has_scope(&["viewer"]));
    }

    #[test]
    fn scope_or_semantics() {
        let p = granted();

        assert!(p.has_scope(&["viewer", "admin"]));
        assert!(!p.has_scope(&["viewer", "editor"]));
        assert!(!p.has_scope(&[]));
    }

    #[test]
    fn event_membership_ignores_level() {
        let p = granted();

        assert!(p.has_event("evt1"));
        assert!(!p.has_event("evt2"));
    }

    #[test]
    fn event_scope_is_exact_match() {
        let p = granted();

        assert!(p.has_event_scope("evt1", &["organizer"]));
        assert!(p.has_event_scope("evt1", &["volunteer", "organizer"]));
        assert!(!p.has_event_scope("evt1", &["volunteer"]));
        // Unknown event: false regardless of the requested level.
        assert!(!p.has_event_scope("evt2", &["organizer"]));
        assert!(!p.has_event_scope("evt1", &[]));
    }

    #[test]
    fn scope_or_event_truth_table() {
        let p = granted();

        // (scope granted, event held) — all four combinations.
        assert!(p.has_scope_or_event("admin", "evt1"));
        assert!(p.has_scope_or_event("admin", "evt2"));
        assert!(p.has_scope_or_event("viewer", "evt1"));
        assert!(!p.has_scope_or_event("viewer", "evt2"));
    }

    #[test]
    fn scope_or_event_scope_either_clause_satisfies() {
        let p = granted();

        assert!(p.has_scope_or_event_scope("nope", "evt1", "organizer"));
        assert!(p.has_scope_or_event_scope("admin", "evt1", "volunteer"));
        assert!(!p.has_scope_or_event_scope("nope", "evt1", "volunteer"));
        assert!(!p.has_scope_or_event_scope("nope", "evt2", "organizer"));
    }
}
