//! Authon backend client.

use authon_types::User;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::AuthonError;
use crate::extract::{Headers, extract_bearer};
use crate::http_client::build_client;
use crate::users::Users;
use crate::webhooks::Webhooks;

/// Production Authon API.
pub const DEFAULT_API_URL: &str = "https://api.authon.dev";

/// Configuration for the Authon client.
#[derive(Debug, Clone)]
pub struct AuthonConfig {
    /// Secret key for server-to-server calls (e.g., "sk_live_...")
    pub secret_key: SecretString,

    /// Base URL of the Authon API (default: `https://api.authon.dev`)
    pub api_url: String,
}

impl AuthonConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        let secret_key: String = secret_key.into();
        Self {
            secret_key: SecretString::new(secret_key.into_boxed_str()),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

/// Server-side Authon client.
///
/// Immutable after construction, so one instance can be shared across tasks
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AuthonBackend {
    pub(crate) secret_key: SecretString,
    pub(crate) api_url: Url,
    pub(crate) http_client: reqwest::Client,
}

impl AuthonBackend {
    /// Create a new Authon client with default HTTP timeouts.
    ///
    /// # Returns
    /// A configured `AuthonBackend` or an error if configuration is invalid.
    pub fn new(config: AuthonConfig) -> Result<Self, AuthonError> {
        let http_client = build_client().map_err(AuthonError::Build)?;
        Self::with_http_client(config, http_client)
    }

    /// Create a new Authon client on top of a caller-built `reqwest::Client`.
    pub fn with_http_client(
        config: AuthonConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, AuthonError> {
        if config.secret_key.expose_secret().is_empty() {
            return Err(AuthonError::Config(
                "secret key is required. Get one from the Authon dashboard.".into(),
            ));
        }

        let api_url = Url::parse(&config.api_url)
            .map_err(|e| AuthonError::Config(format!("invalid API URL: {}", e)))?;
        if api_url.cannot_be_a_base() {
            return Err(AuthonError::Config(format!(
                "API URL cannot be used as a base: {}",
                config.api_url
            )));
        }

        Ok(Self {
            secret_key: config.secret_key,
            api_url,
            http_client,
        })
    }

    /// Verify an access token and return the user it belongs to.
    ///
    /// Calls `GET /v1/auth/verify` with the access token (not the secret key)
    /// as the bearer credential.
    ///
    /// # Example
    /// ```rust,ignore
    /// let user = backend.verify_token("eyJ...").await?;
    /// println!("User ID: {}", user.id);
    /// ```
    pub async fn verify_token(&self, access_token: &str) -> Result<User, AuthonError> {
        let url = self.endpoint(&["v1", "auth", "verify"]);
        let request = self.new_request(Method::GET, url, access_token, None);
        self.send(request).await
    }

    /// Authenticate a request by extracting the bearer token and verifying it.
    ///
    /// Convenience for frameworks without a dedicated middleware.
    pub async fn authenticate<H: Headers>(&self, headers: &H) -> Result<User, AuthonError> {
        let header = headers
            .get_authorization()
            .ok_or_else(|| AuthonError::InvalidToken("missing authorization header".into()))?;
        let token = extract_bearer(header)
            .ok_or_else(|| AuthonError::InvalidToken("invalid authorization format".into()))?;

        self.verify_token(token).await
    }

    /// User management endpoints.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Webhook signature verification. Purely local, no network calls.
    pub fn webhooks(&self) -> Webhooks {
        Webhooks
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // Checked in the constructor: the base URL always has path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
