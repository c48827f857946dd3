use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by Authon endpoints with a status >= 400.
///
/// `status_code` is not always present in the body; the transport fills it
/// in from the HTTP response status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default)]
    pub status_code: u16,

    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) if !code.is_empty() => write!(f, "{}: {}", code, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Webhook verification errors.
///
/// Input validation failures, signature mismatches and payload parse failures
/// are distinct variants so callers can tell a forged request from a
/// malformed one.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Empty webhook payload")]
    EmptyPayload,

    #[error("Empty webhook signature")]
    EmptySignature,

    #[error("Empty webhook secret")]
    EmptySecret,

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Failed to parse webhook payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}
