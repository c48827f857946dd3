pub mod me;
pub mod session;
pub mod users;
pub mod webhooks;

use axum::Router;

use crate::adapters::http::app_state::AppState;

/// Routes that require a verified Authon user.
pub fn protected_router() -> Router<AppState> {
    Router::new()
        .merge(me::router())
        .nest("/users", users::router())
}
