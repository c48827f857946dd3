use async_trait::async_trait;
use authon_types::User;

use crate::error::AuthonError;

/// Resolves an access token to the user it belongs to.
///
/// `AuthonBackend` implements this by calling `/v1/auth/verify`. The request
/// middleware depends only on this trait.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, access_token: &str) -> Result<User, AuthonError>;
}

#[cfg(feature = "client")]
#[async_trait]
impl TokenVerifier for crate::client::AuthonBackend {
    async fn verify_token(&self, access_token: &str) -> Result<User, AuthonError> {
        crate::client::AuthonBackend::verify_token(self, access_token).await
    }
}
