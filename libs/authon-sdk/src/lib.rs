//! Rust SDK for the Authon authentication API.
//!
//! This SDK provides server-side access to Authon for Rust backends.
//!
//! # Features
//!
//! - **Token verification** - Resolve an access token to its user via `/v1/auth/verify`
//! - **User management** - List, fetch, create, update, delete, ban and unban users
//! - **Webhooks** - Verify HMAC-SHA256 signed webhook payloads (no network calls)
//! - **axum middleware** - Authenticate inbound requests and expose the verified user
//!
//! # Example
//!
//! ```rust,ignore
//! use authon_sdk::{AuthonBackend, AuthonConfig, ListOptions};
//!
//! let authon = AuthonBackend::new(AuthonConfig::new("sk_live_..."))?;
//!
//! // Verify a token
//! let user = authon.verify_token("eyJ...").await?;
//! println!("User ID: {}", user.id);
//!
//! // List users
//! let page = authon.users().list(Some(ListOptions::new(1, 20))).await?;
//!
//! // Verify a webhook
//! let event = authon.webhooks().verify_event(&body, &signature, &webhook_secret)?;
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod extract;
#[cfg(feature = "client")]
mod http_client;
#[cfg(feature = "axum")]
mod middleware;
#[cfg(feature = "client")]
mod transport;
#[cfg(feature = "client")]
mod users;
mod verifier;
mod webhooks;

#[cfg(all(test, feature = "client"))]
mod test_support;

#[cfg(feature = "client")]
pub use client::{AuthonBackend, AuthonConfig, DEFAULT_API_URL};
pub use error::AuthonError;
pub use extract::{BEARER_PREFIX, Headers, extract_bearer};
#[cfg(feature = "client")]
pub use http_client::build_client;
#[cfg(feature = "axum")]
pub use middleware::{AuthenticatedUser, SharedVerifier, require_auth, user_from_extensions};
#[cfg(feature = "client")]
pub use transport::SDK_USER_AGENT;
#[cfg(feature = "client")]
pub use users::Users;
pub use verifier::TokenVerifier;
pub use webhooks::Webhooks;

// Re-export shared types for convenience
pub use authon_types::{
    ApiError, BanUserParams, CreateUserParams, ExternalAccount, ListOptions, ListResult,
    Metadata, Session, UpdateUserParams, User, WebhookError, WebhookEvent, sign_webhook_payload,
};
