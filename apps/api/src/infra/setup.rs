use std::sync::Arc;

use authon_sdk::{AuthonBackend, AuthonConfig, SharedVerifier};
use secrecy::ExposeSecret;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, error::InfraError},
};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let authon_config = AuthonConfig::new(config.authon_secret_key.expose_secret())
        .with_api_url(config.authon_api_url.as_str());
    let authon = Arc::new(AuthonBackend::new(authon_config)?);
    let verifier: SharedVerifier = authon.clone();

    Ok(AppState {
        config: Arc::new(config),
        authon,
        verifier,
    })
}

pub fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "authon_demo_api=debug,authon_sdk=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    if json_logs {
        // Structured JSON logs for log shippers
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
            .ok();
    } else {
        // Console (pretty logs)
        registry
            .with(fmt::layer().with_target(false).with_level(true).pretty())
            .try_init()
            .ok();
    }
}
