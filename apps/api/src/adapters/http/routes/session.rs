use authon_sdk::{AuthonError, User};
use axum::{Json, Router, extract::State, http::HeaderMap, routing::get};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

/// Routes that authenticate inline instead of through `require_auth`.
pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(get_session))
}

async fn get_session(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<User>> {
    let user = app_state
        .authon
        .authenticate(&headers)
        .await
        .map_err(|e| match e {
            AuthonError::Api(api) if api.status_code == 401 => AppError::InvalidCredentials,
            other => other.into(),
        })?;

    Ok(Json(user))
}
