//! The per-request authorization context.
//!
//! An [`AuthContext`] is built once per inbound request from the raw
//! `Authorization` header and a [`TokenVerifier`], and discarded at the end
//! of the request. It owns the request's [`Principal`] and exposes every
//! permission check as a method on an explicit value — there is no ambient
//! or shared state, so contexts from concurrent requests are fully
//! independent.
//!
//! Each check comes in two forms: a boolean `has_*` (delegating to
//! [`Principal`]) for handlers that branch on permission, and an asserting
//! `require_*` returning `Result<(), AuthError>` for handlers that
//! short-circuit-fail.

use crate::bearer::bearer_credential;
use crate::claims::Claims;
use crate::error::{AuthError, Required};
use crate::principal::{Identity, Principal};
use crate::verify::{TokenVerifier, VerifyError};

/// Request-scoped authorization context: one principal plus its permission
/// checks.
///
/// # Construction
///
/// - [`AuthContext::from_header`] — the normal path: parse the header,
///   verify the credential, map the claims.
/// - [`AuthContext::from_claims`] — for transports that already hold
///   verified claims, and for tests.
/// - [`AuthContext::anonymous`] — no credential at all.
///
/// Construction is all-or-nothing: the context is either fully anonymous or
/// fully populated from verified claims, never something in between.
///
/// # Examples
///
/// ```
/// use authz_core::{AuthContext, Claims};
///
/// let ctx = AuthContext::from_claims(Claims {
///     scope: Some("admin".to_string()),
///     ..Claims::default()
/// });
///
/// assert!(ctx.require_logged_in().is_ok());
/// assert!(ctx.require_scope(&["admin"]).is_ok());
/// assert!(ctx.require_scope(&["superuser"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    principal: Principal,
}

impl AuthContext {
    /// Creates the anonymous context: not logged in, no scopes, no event
    /// permissions.
    pub fn anonymous() -> Self {
        Self {
            principal: Principal::anonymous(),
        }
    }

    /// Builds a logged-in context from already-verified claims.
    ///
    /// This is the single claims→principal mapping; [`from_header`] goes
    /// through it after verification succeeds.
    ///
    /// [`from_header`]: AuthContext::from_header
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            principal: claims.into_principal(),
        }
    }

    /// Builds a context from a raw `Authorization` header value.
    ///
    /// A missing header, a non-`bearer` scheme, or a scheme without a
    /// credential is not an error: the request proceeds anonymously. A
    /// present credential is handed to `verifier`; only a verification
    /// failure makes this return `Err`, and that error is the collaborator's
    /// own, surfaced unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`VerifyError`] produced by `verifier` when a bearer
    /// credential was present but did not verify.
    ///
    /// # Examples
    ///
    /// ```
    /// # use async_trait::async_trait;
    /// # use authz_core::{AuthContext, Claims, TokenVerifier, VerifyError};
    /// # struct Stub;
    /// # #[async_trait]
    /// # impl TokenVerifier for Stub {
    /// #     async fn verify(&self, _credential: &str) -> Result<Claims, VerifyError> {
    /// #         Ok(Claims { scope: Some("admin".to_string()), ..Claims::default() })
    /// #     }
    /// # }
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), VerifyError> {
    /// let ctx = AuthContext::from_header(Some("Bearer abc.def.ghi"), &Stub).await?;
    /// assert!(ctx.has_scope(&["admin"]));
    ///
    /// // No header is anonymity, not an error.
    /// let anon = AuthContext::from_header(None, &Stub).await?;
    /// assert!(!anon.is_logged_in());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_header<V>(header: Option<&str>, verifier: &V) -> Result<Self, VerifyError>
    where
        V: TokenVerifier + ?Sized,
    {
        let Some(credential) = bearer_credential(header) else {
            tracing::debug!("no bearer credential, proceeding anonymously");
            return Ok(Self::anonymous());
        };

        let claims = verifier.verify(credential).await?;
        let ctx = Self::from_claims(claims);
        tracing::debug!(
            user_id = ctx.identity().user_id.as_deref().unwrap_or(""),
            scopes = ctx.principal.scopes.len(),
            events = ctx.principal.events.len(),
            "authenticated principal"
        );
        Ok(ctx)
    }

    /// Returns the principal this context evaluates.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns the identity attributes of the principal.
    pub fn identity(&self) -> &Identity {
        &self.principal.identity
    }

    /// Returns whether the request carried a valid bearer token.
    pub fn is_logged_in(&self) -> bool {
        self.principal.is_logged_in()
    }

    // ------------------------------------------------------------------
    // Boolean checks (delegating to Principal)
    // ------------------------------------------------------------------

    /// True iff any of the given global scopes is granted.
    /// See [`Principal::has_scope`].
    pub fn has_scope(&self, scopes: &[&str]) -> bool {
        self.principal.has_scope(scopes)
    }

    /// True iff any permission level is held for `event_id`.
    /// See [`Principal::has_event`].
    pub fn has_event(&self, event_id: &str) -> bool {
        self.principal.has_event(event_id)
    }

    /// True iff the level held for `event_id` equals any of `permissions`.
    /// See [`Principal::has_event_scope`].
    pub fn has_event_scope(&self, event_id: &str, permissions: &[&str]) -> bool {
        self.principal.has_event_scope(event_id, permissions)
    }

    /// True iff the global scope is granted or the event is held.
    /// See [`Principal::has_scope_or_event`].
    pub fn has_scope_or_event(&self, scope: &str, event_id: &str) -> bool {
        self.principal.has_scope_or_event(scope, event_id)
    }

    /// True iff the global scope is granted or the event permission is held.
    /// See [`Principal::has_scope_or_event_scope`].
    pub fn has_scope_or_event_scope(
        &self,
        scope: &str,
        event_id: &str,
        event_permission: &str,
    ) -> bool {
        self.principal
            .has_scope_or_event_scope(scope, event_id, event_permission)
    }

    // ------------------------------------------------------------------
    // Asserting checks
    // ------------------------------------------------------------------

    /// Fails with [`AuthError::MustLogIn`] unless the principal is logged
    /// in.
    pub fn require_logged_in(&self) -> Result<(), AuthError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            tracing::trace!("denied: not logged in");
            Err(AuthError::MustLogIn)
        }
    }

    /// Fails with [`AuthError::MissingScope`] unless [`has_scope`] holds.
    ///
    /// The error carries the scopes that would have satisfied the check.
    ///
    /// [`has_scope`]: AuthContext::has_scope
    pub fn require_scope(&self, scopes: &[&str]) -> Result<(), AuthError> {
        if self.has_scope(scopes) {
            Ok(())
        } else {
            Err(self.deny(Required::global(scopes)))
        }
    }

    /// Fails with [`AuthError::MissingScope`] unless [`has_event`] holds.
    ///
    /// Membership-only check, so the error's event requirement is `"any"`.
    ///
    /// [`has_event`]: AuthContext::has_event
    pub fn require_event(&self, event_id: &str) -> Result<(), AuthError> {
        if self.has_event(event_id) {
            Ok(())
        } else {
            Err(self.deny(Required::event(&["any"])))
        }
    }

    /// Fails with [`AuthError::MissingScope`] unless [`has_event_scope`]
    /// holds.
    ///
    /// [`has_event_scope`]: AuthContext::has_event_scope
    pub fn require_event_scope(
        &self,
        event_id: &str,
        permissions: &[&str],
    ) -> Result<(), AuthError> {
        if self.has_event_scope(event_id, permissions) {
            Ok(())
        } else {
            Err(self.deny(Required::event(permissions)))
        }
    }

    /// Fails with [`AuthError::MissingScope`] unless [`has_scope_or_event`]
    /// holds.
    ///
    /// [`has_scope_or_event`]: AuthContext::has_scope_or_event
    pub fn require_scope_or_event(&self, scope: &str, event_id: &str) -> Result<(), AuthError> {
        if self.has_scope_or_event(scope, event_id) {
            Ok(())
        } else {
            Err(self.deny(Required::either(scope, "any")))
        }
    }

    /// Fails with [`AuthError::MissingScope`] unless
    /// [`has_scope_or_event_scope`] holds.
    ///
    /// [`has_scope_or_event_scope`]: AuthContext::has_scope_or_event_scope
    pub fn require_scope_or_event_scope(
        &self,
        scope: &str,
        event_id: &str,
        event_permission: &str,
    ) -> Result<(), AuthError> {
        if self.has_scope_or_event_scope(scope, event_id, event_permission) {
            Ok(())
        } else {
            Err(self.deny(Required::either(scope, event_permission)))
        }
    }

    fn deny(&self, required: Required) -> AuthError {
        tracing::trace!(%required, logged_in = self.is_logged_in(), "denied");
        AuthError::MissingScope(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Verifier returning fixed claims, or a fixed error.
    struct StubVerifier(Result<Claims, fn() -> VerifyError>);

    #[async_trait]
    impl TokenVerifier for StubVerifier {
        async fn verify(&self, _credential: &str) -> Result<Claims, VerifyError> {
            match &self.0 {
                Ok(claims) => Ok(claims.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn organizer_claims() -> Claims {
        Claims {
            sub: Some("user-1".to_string()),
            scope: Some("admin".to_string()),
            events: [("evt1".to_string(), "organizer".to_string())]
                .into_iter()
                .collect(),
            ..Claims::default()
        }
    }

    #[tokio::test]
    async fn missing_header_is_anonymous_not_an_error() {
        let verifier = StubVerifier(Ok(organizer_claims()));

        let ctx = AuthContext::from_header(None, &verifier).await.unwrap();
        assert!(!ctx.is_logged_in());
        assert!(ctx.principal().scopes.is_empty());
        assert!(ctx.principal().events.is_empty());
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_anonymous() {
        let verifier = StubVerifier(Ok(organizer_claims()));

        let ctx = AuthContext::from_header(Some("Basic dXNlcg=="), &verifier)
            .await
            .unwrap();
        assert!(!ctx.is_logged_in());
    }

    #[tokio::test]
    async fn empty_credential_is_anonymous() {
        let verifier = StubVerifier(Ok(organizer_claims()));

        let ctx = AuthContext::from_header(Some("Bearer"), &verifier)
            .await
            .unwrap();
        assert!(!ctx.is_logged_in());
    }

    #[tokio::test]
    async fn verified_token_populates_principal() {
        let verifier = StubVerifier(Ok(organizer_claims()));

        let ctx = AuthContext::from_header(Some("Bearer tok"), &verifier)
            .await
            .unwrap();

        assert!(ctx.is_logged_in());
        assert_eq!(ctx.identity().user_id.as_deref(), Some("user-1"));
        assert!(ctx.has_scope(&["admin"]));
        assert!(ctx.has_event_scope("evt1", &["organizer"]));
    }

    #[tokio::test]
    async fn verification_failure_propagates() {
        let verifier = StubVerifier(Err(|| VerifyError::Expired));

        let err = AuthContext::from_header(Some("Bearer expired"), &verifier)
            .await
            .unwrap_err();
        assert!(matches!(err, VerifyError::Expired));
    }

    #[test]
    fn require_scope_matches_has_scope() {
        let ctx = AuthContext::from_claims(organizer_claims());

        assert!(ctx.require_scope(&["admin"]).is_ok());
        assert!(ctx.require_scope(&["viewer", "admin"]).is_ok());

        let err = ctx.require_scope(&["viewer"]).unwrap_err();
        assert_eq!(err, AuthError::MissingScope(Required::global(&["viewer"])));
    }

    #[test]
    fn require_event_uses_any_requirement() {
        let ctx = AuthContext::from_claims(organizer_claims());

        assert!(ctx.require_event("evt1").is_ok());

        let err = ctx.require_event("evt2").unwrap_err();
        assert_eq!(err, AuthError::MissingScope(Required::event(&["any"])));
    }

    #[test]
    fn require_event_scope_carries_requested_levels() {
        let ctx = AuthContext::from_claims(organizer_claims());

        assert!(ctx.require_event_scope("evt1", &["organizer"]).is_ok());

        let err = ctx.require_event_scope("evt1", &["volunteer"]).unwrap_err();
        assert_eq!(err, AuthError::MissingScope(Required::event(&["volunteer"])));
    }

    #[test]
    fn require_scope_or_event_combinator() {
        let ctx = AuthContext::from_claims(organizer_claims());

        assert!(ctx.require_scope_or_event("admin", "evt2").is_ok());
        assert!(ctx.require_scope_or_event("viewer", "evt1").is_ok());

        let err = ctx.require_scope_or_event("viewer", "evt2").unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingScope(Required::either("viewer", "any"))
        );
    }

    #[test]
    fn require_scope_or_event_scope_combinator() {
        let ctx = AuthContext::from_claims(organizer_claims());

        // Second clause alone satisfies.
        assert!(ctx
            .require_scope_or_event_scope("nope", "evt1", "organizer")
            .is_ok());

        let err = ctx
            .require_scope_or_event_scope("nope", "evt1", "volunteer")
            .unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingScope(Required::either("nope", "volunteer"))
        );
    }

    #[test]
    fn require_logged_in() {
        let ctx = AuthContext::from_claims(organizer_claims());
        assert!(ctx.require_logged_in().is_ok());

        let anon = AuthContext::anonymous();
        assert_eq!(anon.require_logged_in().unwrap_err(), AuthError::MustLogIn);
    }

    #[test]
    fn anonymous_context_fails_every_check() {
        let anon = AuthContext::anonymous();

        assert!(anon.require_scope(&["admin"]).is_err());
        assert!(anon.require_event("evt1").is_err());
        assert!(anon.require_event_scope("evt1", &["organizer"]).is_err());
        assert!(anon.require_scope_or_event("admin", "evt1").is_err());
        assert!(anon
            .require_scope_or_event_scope("admin", "evt1", "organizer")
            .is_err());
    }
}
