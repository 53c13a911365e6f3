//! The per-request entry point for transport layers.

use crate::context::AuthContext;
use crate::verify::{TokenVerifier, VerifyError};

use super::ExtractAuthorization;

/// Builds the request's [`AuthContext`] from any type exposing an
/// `Authorization` header.
///
/// This is a thin wrapper over [`AuthContext::from_header`]: it exists so
/// middleware can be written once against [`ExtractAuthorization`] instead
/// of once per transport shape. Requests without a usable bearer credential
/// yield an anonymous context.
///
/// # Errors
///
/// Returns the [`VerifyError`] from `verifier` when a bearer credential was
/// present but failed verification. Transports should map this to an
/// authentication-failure response, distinct from the authorization denials
/// the context's `require_*` methods produce later.
///
/// # Examples
///
/// ```
/// # use async_trait::async_trait;
/// # use authz_core::{Claims, TokenVerifier, VerifyError};
/// use authz_core::web::{authenticate, RequestAdapter};
///
/// # struct Stub;
/// # #[async_trait]
/// # impl TokenVerifier for Stub {
/// #     async fn verify(&self, _credential: &str) -> Result<Claims, VerifyError> {
/// #         Ok(Claims::default())
/// #     }
/// # }
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), VerifyError> {
/// let mut request = RequestAdapter::new();
/// request.add_header("Authorization".to_string(), "Bearer tok".to_string());
///
/// let ctx = authenticate(&request, &Stub).await?;
/// assert!(ctx.is_logged_in());
/// # Ok(())
/// # }
/// ```
pub async fn authenticate<R, V>(request: &R, verifier: &V) -> Result<AuthContext, VerifyError>
where
    R: ExtractAuthorization + ?Sized,
    V: TokenVerifier + ?Sized,
{
    AuthContext::from_header(request.authorization(), verifier).await
}
