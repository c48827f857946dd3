use authon_types::{Metadata, WebhookEvent, verify_webhook, verify_webhook_event};

use crate::error::AuthonError;

/// Webhook signature verification.
///
/// Stateless; the signing secret is passed per call because Authon issues a
/// separate secret per webhook endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Webhooks;

impl Webhooks {
    /// Verify an HMAC-SHA256 signed payload and return it as a JSON object.
    pub fn verify(
        &self,
        payload: &[u8],
        signature: &str,
        secret: &str,
    ) -> Result<Metadata, AuthonError> {
        Ok(verify_webhook(payload, signature, secret)?)
    }

    /// Verify a signed payload and decode it as a [`WebhookEvent`].
    pub fn verify_event(
        &self,
        payload: &[u8],
        signature: &str,
        secret: &str,
    ) -> Result<WebhookEvent, AuthonError> {
        Ok(verify_webhook_event(payload, signature, secret)?)
    }
}
