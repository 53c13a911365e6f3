//! Request-scoped authorization contexts for bearer-token APIs.
//!
//! This crate builds a per-request authorization context from a bearer
//! token and exposes helpers that let request handlers declare required
//! permissions. The core is a small permission algebra: global scopes and
//! per-event permission levels, each check available as a boolean (`has_*`)
//! and an asserting (`require_*`) variant, plus OR-combinators for "a
//! global capability or a per-event delegation grants access".
//!
//! Token cryptography is not this crate's business: verification sits
//! behind the async [`TokenVerifier`] seam, and transports plug in through
//! [`web::ExtractAuthorization`].
//!
//! # Core Types
//!
//! - [`AuthContext`]: the per-request evaluator bundle
//! - [`Principal`]: identity + granted scopes + event permissions
//! - [`Claims`]: the verified token payload schema
//! - [`TokenVerifier`]: the opaque verification collaborator
//! - [`AuthError`]: authorization denials ([`MissingScope`](AuthError::MissingScope),
//!   [`MustLogIn`](AuthError::MustLogIn))
//! - [`VerifyError`]: authentication failures, surfaced unchanged
//!
//! # Examples
//!
//! ```
//! use authz_core::{AuthContext, Claims};
//!
//! // Transports normally call AuthContext::from_header with a verifier;
//! // from_claims is the post-verification half of that path.
//! let ctx = AuthContext::from_claims(Claims {
//!     scope: Some("admin".to_string()),
//!     ..Claims::default()
//! });
//!
//! // Branch on permission…
//! if ctx.has_scope(&["admin"]) {
//!     // privileged path
//! }
//!
//! // …or short-circuit-fail with a structured denial.
//! ctx.require_scope_or_event_scope("admin", "evt1", "organizer")
//!     .expect("admin scope satisfies the global clause");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bearer;
mod claims;
mod context;
mod error;
mod principal;
mod verify;
pub mod web;

pub use claims::{Claims, CLAIM_NAMESPACE};
pub use context::AuthContext;
pub use error::{AuthError, Required};
pub use principal::{Identity, Principal};
pub use verify::{TokenVerifier, VerifyError};
