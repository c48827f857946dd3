//! Bearer token extraction.

/// Scheme prefix of the Authorization header. Matched case-sensitively.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Trait for accessing HTTP headers in a framework-agnostic way.
///
/// Implement this trait for your framework's header type to use
/// `AuthonBackend::authenticate()`. It is already implemented for
/// `axum::http::HeaderMap` when the `axum` feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// use authon_sdk::Headers;
///
/// struct MyHeaders(std::collections::HashMap<String, String>);
///
/// impl Headers for MyHeaders {
///     fn get_authorization(&self) -> Option<&str> {
///         self.0.get("authorization").map(String::as_str)
///     }
/// }
/// ```
pub trait Headers {
    /// Get the Authorization header value.
    fn get_authorization(&self) -> Option<&str>;
}

#[cfg(feature = "axum")]
impl Headers for axum::http::HeaderMap {
    fn get_authorization(&self) -> Option<&str> {
        self.get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// Returns `None` for other schemes and for an empty token.
pub fn extract_bearer(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
}
