use authon_types::{ApiError, WebhookError};
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum AuthonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable token in the request
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Request body could not be serialized
    #[error("Failed to marshal request body: {0}")]
    Marshal(#[source] serde_json::Error),

    /// Request could not be assembled (e.g., a header value with control characters)
    #[cfg(feature = "client")]
    #[error("Failed to create request: {0}")]
    Build(#[source] reqwest::Error),

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a status >= 400
    #[error("API error ({}): {}", .0.status_code, .0)]
    Api(ApiError),

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A response body was expected but the API sent none
    #[error("Empty response body")]
    EmptyResponse,

    /// Webhook verification failed
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl AuthonError {
    /// HTTP status of an API error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AuthonError::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Whether the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}
