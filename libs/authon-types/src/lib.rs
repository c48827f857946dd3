//! Shared types and webhook primitives for the Authon API.
//!
//! This crate provides:
//! - Response DTOs (`User`, `ExternalAccount`, `Session`, `ListResult`)
//! - Request parameters for the user management endpoints
//! - The structured API error body (`ApiError`)
//! - HMAC-SHA256 webhook signing and verification (`verify_webhook`)

mod errors;
mod requests;
mod responses;
mod webhook;

pub use errors::{ApiError, WebhookError};
pub use requests::{BanUserParams, CreateUserParams, ListOptions, UpdateUserParams};
pub use responses::{ExternalAccount, ListResult, Session, User};
pub use webhook::{
    WebhookEvent, sign_webhook_payload, verify_webhook, verify_webhook_event,
};

/// Free-form JSON object attached to users and webhook payloads.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
