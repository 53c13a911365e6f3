//! The token-verification seam.
//!
//! Cryptographic verification — signature, issuer, audience, expiry, and
//! whatever signing-key fetching or caching that requires — lives behind
//! [`TokenVerifier`]. This crate treats it as an opaque async collaborator:
//! a credential goes in, verified [`Claims`] or a [`VerifyError`] come out.

use async_trait::async_trait;
use thiserror::Error;

use crate::claims::Claims;

/// Verification failure reported by the token-verification collaborator.
///
/// These are authentication failures, distinct from the authorization
/// denials in [`AuthError`](crate::AuthError): the caller presented a
/// credential and the credential was bad. They propagate unchanged through
/// context construction so the transport layer can map them to an
/// authentication-failure response.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The token's expiry time has passed.
    #[error("token expired")]
    Expired,

    /// The signature does not match the signing key.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token was issued for a different audience.
    #[error("invalid token audience")]
    InvalidAudience,

    /// The token was issued by an unexpected issuer.
    #[error("invalid token issuer")]
    InvalidIssuer,

    /// The signing key could not be fetched (network failure, unknown key
    /// id, and similar).
    #[error("signing key unavailable: {0}")]
    KeyUnavailable(String),

    /// Any other failure from the verification collaborator.
    #[error("token verification failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Verifies a bearer credential and returns its claims.
///
/// Implementations wrap a JWT (or equivalent) library configured with the
/// expected audience, issuer, and allowed signing algorithm. The call is
/// async because fetching signing material may perform network I/O; it must
/// be cancel-safe and have no side effects on failure.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use authz_core::{Claims, TokenVerifier, VerifyError};
///
/// /// Accepts every credential and returns empty claims. Test use only.
/// struct AcceptAll;
///
/// #[async_trait]
/// impl TokenVerifier for AcceptAll {
///     async fn verify(&self, _credential: &str) -> Result<Claims, VerifyError> {
///         Ok(Claims::default())
///     }
/// }
/// ```
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies `credential` and returns the claims it carries.
    ///
    /// # Errors
    ///
    /// Returns a [`VerifyError`] describing why the credential was rejected.
    async fn verify(&self, credential: &str) -> Result<Claims, VerifyError>;
}
