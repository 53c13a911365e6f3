//! Request adapter for frameworks without a natural header accessor.

use std::collections::HashMap;

use super::ExtractAuthorization;

/// Owned-data adapter for converting framework-specific requests into
/// something the core can read.
///
/// `RequestAdapter` intentionally holds simple owned data to avoid coupling
/// to any framework's request types. Framework integrations should
/// implement `From<FrameworkRequest>` for `RequestAdapter` (or implement
/// [`ExtractAuthorization`] on their own types directly and skip the
/// adapter).
///
/// Header names are matched case-insensitively, as HTTP requires.
///
/// # Examples
///
/// ```
/// use authz_core::web::{ExtractAuthorization, RequestAdapter};
///
/// let mut adapter = RequestAdapter::new();
/// adapter.add_header("Authorization".to_string(), "Bearer tok".to_string());
///
/// assert_eq!(adapter.authorization(), Some("Bearer tok"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestAdapter {
    /// Request headers, keyed by lowercased name.
    headers: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header to the adapter. Names are lowercased on insertion.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name.to_ascii_lowercase(), value);
    }

    /// Returns a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl ExtractAuthorization for RequestAdapter {
    fn authorization(&self) -> Option<&str> {
        self.header("authorization")
    }
}
