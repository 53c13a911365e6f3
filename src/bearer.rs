//! Authorization header parsing.
//!
//! A missing or malformed header is not an error anywhere in this crate: it
//! degrades to anonymity. This module therefore returns `Option`, never
//! `Result`.

/// Extracts the bearer credential from a raw `Authorization` header value.
///
/// The header splits on whitespace into a scheme and a credential. Returns
/// `Some(credential)` only when the scheme is `bearer` (case-insensitive)
/// and a credential is present; everything else — no header, an unknown
/// scheme, a bare `Bearer` with no credential — returns `None`.
pub(crate) fn bearer_credential(header: Option<&str>) -> Option<&str> {
    let mut parts = header?.split_whitespace();
    let scheme = parts.next()?;
    let credential = parts.next()?;

    if scheme.eq_ignore_ascii_case("bearer") {
        Some(credential)
    } else {
        None
    }
}
