//! The extraction boundary trait for transport integration.

/// Access to a request's raw `Authorization` header value.
///
/// This is the only thing the core needs from a transport: one extractor
/// parameterized by "get the header value", with framework-specific adapter
/// types living outside the core. Implement it for whatever request shape a
/// framework hands you — a full request object, a header map, or a plain
/// `Option<String>` you already pulled out.
///
/// # Examples
///
/// ```
/// use authz_core::web::ExtractAuthorization;
///
/// struct MyFrameworkRequest {
///     authorization: Option<String>,
/// }
///
/// impl ExtractAuthorization for MyFrameworkRequest {
///     fn authorization(&self) -> Option<&str> {
///         self.authorization.as_deref()
///     }
/// }
/// ```
pub trait ExtractAuthorization {
    /// Returns the raw `Authorization` header value, if the request carried
    /// one.
    fn authorization(&self) -> Option<&str>;
}

impl ExtractAuthorization for Option<String> {
    fn authorization(&self) -> Option<&str> {
        self.as_deref()
    }
}
