use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::{Metadata, WebhookError};

type HmacSha256 = Hmac<Sha256>;

/// Prefix Authon puts in front of the hex digest in the signature header.
const SIGNATURE_PREFIX: &str = "sha256=";

/// Envelope of an inbound Authon webhook notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: String,

    /// Event type (e.g., "user.created", "session.ended")
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event-specific payload, left opaque
    #[serde(default)]
    pub data: serde_json::Value,

    pub timestamp: DateTime<Utc>,
}

/// Computes the lowercase hex HMAC-SHA256 of `payload` keyed with `secret`.
///
/// This is the value Authon sends in the `x-authon-signature` header
/// (optionally prefixed with `sha256=`).
pub fn sign_webhook_payload(payload: &[u8], secret: &str) -> String {
    hex::encode(mac_for(payload, secret).finalize().into_bytes())
}

/// Verifies a webhook signature and parses the payload as a JSON object.
///
/// # Arguments
/// * `payload` - The raw request body, exactly as received
/// * `signature` - Hex HMAC-SHA256 of the body, with or without `sha256=`
/// * `secret` - The webhook signing secret from the Authon dashboard
///
/// # Errors
/// Empty inputs are rejected before any HMAC work. A signature that does not
/// match is `WebhookError::InvalidSignature`; a correctly signed body that is
/// not a JSON object is `WebhookError::InvalidPayload`.
pub fn verify_webhook(
    payload: &[u8],
    signature: &str,
    secret: &str,
) -> Result<Metadata, WebhookError> {
    verify_signature(payload, signature, secret)?;
    serde_json::from_slice(payload).map_err(WebhookError::InvalidPayload)
}

/// Same checks as [`verify_webhook`], decoding into a typed [`WebhookEvent`].
pub fn verify_webhook_event(
    payload: &[u8],
    signature: &str,
    secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    verify_signature(payload, signature, secret)?;
    serde_json::from_slice(payload).map_err(WebhookError::InvalidPayload)
}

fn verify_signature(payload: &[u8], signature: &str, secret: &str) -> Result<(), WebhookError> {
    if payload.is_empty() {
        return Err(WebhookError::EmptyPayload);
    }
    if signature.is_empty() {
        return Err(WebhookError::EmptySignature);
    }
    if secret.is_empty() {
        return Err(WebhookError::EmptySecret);
    }

    let provided = signature.strip_prefix(SIGNATURE_PREFIX).unwrap_or(signature);
    let expected = sign_webhook_payload(payload, secret);

    if constant_time_compare(provided, &expected) {
        Ok(())
    } else {
        Err(WebhookError::InvalidSignature)
    }
}

/// Compares the lowercase hex strings byte for byte. Case matters.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

fn mac_for(payload: &[u8], secret: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload);
    mac
}
