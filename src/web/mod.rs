//! Transport integration surface.
//!
//! This module is the boundary between HTTP/GraphQL frameworks and the
//! authorization core. It contains no framework-specific code; it defines
//! the one accessor a framework must provide (the raw `Authorization`
//! header value) and a single entry point that turns a request plus a
//! [`TokenVerifier`](crate::TokenVerifier) into an
//! [`AuthContext`](crate::AuthContext).
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: framework-specific adapters implement
//!    [`ExtractAuthorization`]; nothing here imports a framework.
//!
//! 2. **One Extractor**: every transport shape funnels through the same
//!    header-parsing and claims-mapping path. Adapters only answer "what is
//!    the Authorization header value".
//!
//! 3. **Anonymity Is Not an Error**: requests without a usable bearer
//!    credential produce an anonymous context. Only a failing verification
//!    of a present credential produces an error.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework-specific type implements ExtractAuthorization
//!   ↓
//! web::authenticate(&request, &verifier).await
//!   ↓
//! AuthContext (anonymous or populated) or VerifyError
//!   ↓
//! Handlers call has_* / require_* on the context
//! ```

mod adapter;
mod extract;
mod middleware;

pub use adapter::RequestAdapter;
pub use extract::ExtractAuthorization;
pub use middleware::authenticate;
