use authon_sdk::require_auth;
use axum::{Json, Router, http, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

pub fn create_app(app_state: AppState) -> Router {
    let protected = adapters::http::routes::protected_router().layer(
        middleware::from_fn_with_state(app_state.verifier.clone(), require_auth),
    );

    Router::new()
        .route("/health", get(health))
        .nest("/auth", adapters::http::routes::session::router())
        .nest("/api", protected)
        .nest("/webhooks", adapters::http::routes::webhooks::router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                        let request_id = Uuid::new_v4();
                        tracing::info_span!(
                            "http-request",
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                            request_id = %request_id
                        )
                    }),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_CONTENT_TYPE_OPTIONS,
                    http::HeaderValue::from_static("nosniff"),
                )),
        )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header::AUTHORIZATION};
    use axum_test::TestServer;

    use crate::test_utils::TestAppStateBuilder;

    #[tokio::test]
    async fn health_is_public() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
        assert_eq!(response.header(http::header::X_CONTENT_TYPE_OPTIONS), "nosniff");
    }

    #[tokio::test]
    async fn api_routes_require_a_bearer_token() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        for path in ["/api/me", "/api/users", "/api/users/user_1"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::UNAUTHORIZED);
            response.assert_json(&serde_json::json!({ "error": "missing authorization header" }));
        }
    }

    #[tokio::test]
    async fn api_rejects_unknown_token() {
        let server = TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .get("/api/me")
            .add_header(AUTHORIZATION, http::HeaderValue::from_static("Bearer forged"))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&serde_json::json!({ "error": "invalid or expired token" }));
    }
}
