use authon_sdk::{AuthonError, WebhookError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(String),

    #[error("Not found")]
    NotFound,

    #[error("Authon API error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    InvalidCredentials,
    InvalidInput,
    InvalidSignature,
    InvalidPayload,
    NotFound,
    UpstreamError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidSignature => "INVALID_SIGNATURE",
            ErrorCode::InvalidPayload => "INVALID_PAYLOAD",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<AuthonError> for AppError {
    fn from(e: AuthonError) -> Self {
        match e {
            AuthonError::Api(api) => match api.status_code {
                404 => AppError::NotFound,
                400 | 422 => AppError::InvalidInput(api.message),
                _ => AppError::Upstream(api.to_string()),
            },
            AuthonError::InvalidToken(_) => AppError::InvalidCredentials,
            AuthonError::Webhook(webhook) => match webhook {
                WebhookError::EmptySignature | WebhookError::InvalidSignature => {
                    AppError::InvalidSignature
                }
                WebhookError::EmptyPayload => AppError::InvalidPayload("empty body".into()),
                WebhookError::InvalidPayload(source) => AppError::InvalidPayload(source.to_string()),
                WebhookError::EmptySecret => AppError::Internal("webhook secret not configured".into()),
            },
            AuthonError::Config(msg) => AppError::Internal(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}
