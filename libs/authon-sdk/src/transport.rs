//! Request construction and response decoding shared by every endpoint.

use authon_types::ApiError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::AuthonBackend;
use crate::error::AuthonError;

/// Sent on every outbound call.
pub const SDK_USER_AGENT: &str = concat!("authon-rust/", env!("CARGO_PKG_VERSION"));

impl AuthonBackend {
    /// Request authenticated with the server secret key.
    pub(crate) fn secret_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> RequestBuilder {
        self.new_request(method, url, self.secret_key.expose_secret(), body)
    }

    /// Request authenticated with an arbitrary bearer credential.
    ///
    /// Exactly one Authorization header is set. Invalid header values surface
    /// as `AuthonError::Build` when the request is sent.
    pub(crate) fn new_request(
        &self,
        method: Method,
        url: Url,
        credential: &str,
        body: Option<Vec<u8>>,
    ) -> RequestBuilder {
        let mut builder = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", credential))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, SDK_USER_AGENT);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder
    }

    /// Send and decode a JSON response. An empty success body is an error.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, AuthonError> {
        let (status, body) = self.execute(builder).await?;
        decode_response(status, &body)?.ok_or(AuthonError::EmptyResponse)
    }

    /// Send and only check the status; the body is ignored on success.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), AuthonError> {
        let (status, body) = self.execute(builder).await?;
        check_status(status, &body)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(StatusCode, Vec<u8>), AuthonError> {
        let request = builder.build().map_err(AuthonError::Build)?;

        tracing::debug!(
            method = %request.method(),
            path = %request.url().path(),
            "Sending Authon API request"
        );

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok((status, body.to_vec()))
    }
}

/// Serialize a request body to JSON.
pub(crate) fn json_body<B: Serialize>(body: &B) -> Result<Vec<u8>, AuthonError> {
    serde_json::to_vec(body).map_err(AuthonError::Marshal)
}

/// Map a status >= 400 to `AuthonError::Api`.
///
/// Prefers the structured `{message, code}` body; falls back to the raw body
/// text when it does not decode or carries no message.
pub(crate) fn check_status(status: StatusCode, body: &[u8]) -> Result<(), AuthonError> {
    if status.as_u16() < 400 {
        return Ok(());
    }

    let api_error = match serde_json::from_slice::<ApiError>(body) {
        Ok(mut parsed) if !parsed.message.is_empty() => {
            parsed.status_code = status.as_u16();
            parsed
        }
        _ => ApiError {
            status_code: status.as_u16(),
            message: String::from_utf8_lossy(body).into_owned(),
            code: None,
        },
    };

    tracing::warn!(
        status = api_error.status_code,
        code = ?api_error.code,
        "Authon API returned an error"
    );

    Err(AuthonError::Api(api_error))
}

/// Decode a response body. `Ok(None)` for an empty success body.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Option<T>, AuthonError> {
    check_status(status, body)?;

    if body.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(AuthonError::Decode)
}
