//! Fake token verifier for middleware-protected routes.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use authon_sdk::{ApiError, AuthonError, TokenVerifier, User};

/// Token every test request should send to pass the middleware.
pub const TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Accepts a single token and resolves it to a fixed user.
pub struct StaticTokenVerifier {
    token: String,
    user: User,
    calls: AtomicUsize,
}

impl StaticTokenVerifier {
    pub fn new(token: &str, user: User) -> Self {
        Self {
            token: token.to_string(),
            user,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify_token(&self, access_token: &str) -> Result<User, AuthonError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if access_token == self.token {
            Ok(self.user.clone())
        } else {
            Err(AuthonError::Api(ApiError {
                status_code: 401,
                message: "Invalid token".into(),
                code: Some("invalid_token".into()),
            }))
        }
    }
}
