use authon_sdk::AuthonError;
use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are safe for logs; the secret key never appears in them.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Authon client setup failed. Check AUTHON_SECRET_KEY and AUTHON_API_URL.")]
    AuthonClient(#[source] AuthonError),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<AuthonError> for InfraError {
    fn from(e: AuthonError) -> Self {
        InfraError::AuthonClient(e)
    }
}
