//! axum integration: request authentication middleware and user extractor.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::{Router, middleware, routing::get};
//! use authon_sdk::{AuthenticatedUser, AuthonBackend, AuthonConfig, SharedVerifier, require_auth};
//!
//! let backend = AuthonBackend::new(AuthonConfig::new("sk_live_..."))?;
//! let verifier: SharedVerifier = Arc::new(backend);
//!
//! let app: Router = Router::new()
//!     .route("/me", get(|AuthenticatedUser(user): AuthenticatedUser| async move { user.id }))
//!     .layer(middleware::from_fn_with_state(verifier, require_auth));
//! ```

use std::convert::Infallible;
use std::ops::Deref;
use std::sync::Arc;

use authon_types::User;
use axum::{
    Json,
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{Extensions, StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::extract::extract_bearer;
use crate::verifier::TokenVerifier;

/// Verifier handed to [`require_auth`] as middleware state.
pub type SharedVerifier = Arc<dyn TokenVerifier>;

const MISSING_HEADER: &str = "missing authorization header";
const INVALID_FORMAT: &str = "invalid authorization format";
const INVALID_TOKEN: &str = "invalid or expired token";
const NOT_AUTHENTICATED: &str = "not authenticated";

/// Rejects the request with 401 unless it carries a bearer token the
/// verifier accepts. On success the verified [`User`] is stored in the
/// request extensions for downstream handlers.
///
/// Verification failures of every kind produce the same response; the cause
/// is only logged.
pub async fn require_auth(
    State(verifier): State<SharedVerifier>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return unauthorized(MISSING_HEADER);
    };

    let Some(token) = extract_bearer(header).map(str::to_owned) else {
        return unauthorized(INVALID_FORMAT);
    };

    match verifier.verify_token(&token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "Request authenticated");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Token verification failed");
            unauthorized(INVALID_TOKEN)
        }
    }
}

/// The user verified by [`require_auth`] for the current request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_from_extensions(&parts.extensions)
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| unauthorized(NOT_AUTHENTICATED))
    }
}

impl<S> OptionalFromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(user_from_extensions(&parts.extensions)
            .cloned()
            .map(AuthenticatedUser))
    }
}

/// Look up the verified user. `None` when [`require_auth`] did not run.
pub fn user_from_extensions(extensions: &Extensions) -> Option<&User> {
    extensions.get::<User>()
}

fn unauthorized(message: &'static str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
