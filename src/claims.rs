//! The verified-token payload schema and its mapping onto [`Principal`].
//!
//! This module only maps the wire shape of a verified token onto domain
//! types. It performs no validation of its own: by the time a [`Claims`]
//! value exists, the signature, issuer, and audience have already been
//! checked by the verification collaborator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::principal::{Identity, Principal};

/// Namespace prefix for the custom claims this crate consumes.
///
/// Identity providers forbid un-namespaced custom claims, so everything
/// beyond the registered claims (`sub`, `email`, `scope`) is keyed under
/// this URI.
pub const CLAIM_NAMESPACE: &str = "https://events.example.com/jwt/";

/// The payload of a verified bearer token.
///
/// Registered claims keep their standard names; custom claims are
/// vendor-namespaced under [`CLAIM_NAMESPACE`]. All fields are optional on
/// the wire — a token that carries none of them still verifies, and maps to
/// a logged-in principal with no scopes and no event permissions.
///
/// # Examples
///
/// ```
/// use authz_core::Claims;
///
/// let claims: Claims = serde_json::from_value(serde_json::json!({
///     "sub": "user-1",
///     "scope": "admin events:read",
///     "https://events.example.com/jwt/events": { "evt1": "organizer" },
/// }))
/// .unwrap();
///
/// let principal = claims.into_principal();
/// assert!(principal.has_scope(&["admin"]));
/// assert!(principal.has_event_scope("evt1", &["organizer"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Stable subject identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Primary email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Space-separated global permission scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Login/display username.
    #[serde(
        default,
        rename = "https://events.example.com/jwt/username",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,

    /// Corporate email address.
    #[serde(
        default,
        rename = "https://events.example.com/jwt/corporate-email",
        skip_serializing_if = "Option::is_none"
    )]
    pub corporate_email: Option<String>,

    /// Phone number.
    #[serde(
        default,
        rename = "https://events.example.com/jwt/phone-number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,

    /// Preferred pronoun.
    #[serde(
        default,
        rename = "https://events.example.com/jwt/pronoun",
        skip_serializing_if = "Option::is_none"
    )]
    pub pronoun: Option<String>,

    /// Event identifier → permission level granted for that event.
    #[serde(
        default,
        rename = "https://events.example.com/jwt/events",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub events: HashMap<String, String>,
}

impl Claims {
    /// Maps this verified payload onto a logged-in [`Principal`].
    ///
    /// The `scope` claim splits on whitespace into the scope set, the event
    /// claim carries over directly, and the remaining claims populate the
    /// identity record. The mapping is total: missing claims become empty
    /// containers or `None`, never an error.
    pub fn into_principal(self) -> Principal {
        let scopes = self
            .scope
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect();

        Principal {
            logged_in: true,
            identity: Identity {
                user_id: self.sub,
                username: self.username,
                email: self.email,
                corporate_email: self.corporate_email,
                phone_number: self.phone_number,
                pronoun: self.pronoun,
            },
            scopes,
            events: self.events,
        }
    }
}
