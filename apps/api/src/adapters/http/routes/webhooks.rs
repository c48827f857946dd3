use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    routing::post,
};
use secrecy::ExposeSecret;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

/// Header carrying the hex HMAC-SHA256 of the raw request body.
pub const SIGNATURE_HEADER: &str = "x-authon-signature";

pub fn router() -> Router<AppState> {
    Router::new().route("/authon", post(receive_authon_event))
}

/// Verifies the signature over the exact bytes received, before any parsing.
async fn receive_authon_event(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<serde_json::Value>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;

    let event = app_state.authon.webhooks().verify_event(
        &body,
        signature,
        app_state.config.webhook_secret.expose_secret(),
    )?;

    tracing::info!(
        event_id = %event.id,
        event_type = %event.event_type,
        "Authon webhook received"
    );

    Ok(Json(serde_json::json!({ "received": true })))
}
