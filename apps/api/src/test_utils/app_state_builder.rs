//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with a fake verifier and, optionally, a local Authon API.

use std::sync::Arc;

use authon_sdk::{AuthonBackend, AuthonConfig, SharedVerifier};
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::{StaticTokenVerifier, TEST_ACCESS_TOKEN, create_test_user},
};

pub const TEST_SECRET_KEY: &str = "sk_test_demo";
pub const TEST_WEBHOOK_SECRET: &str = "whsec_test_demo";

/// Builder for test `AppState`.
///
/// By default the verifier accepts `TEST_ACCESS_TOKEN` as `create_test_user(|_| {})`
/// and the Authon API URL points at a port nothing listens on.
pub struct TestAppStateBuilder {
    verifier: Option<SharedVerifier>,
    api_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            verifier: None,
            api_url: "http://127.0.0.1:1".to_string(),
        }
    }

    pub fn with_verifier(mut self, verifier: SharedVerifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_authon_api(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn build(self) -> AppState {
        let api_url: Url = self.api_url.parse().unwrap();
        let config = AppConfig {
            authon_secret_key: SecretString::new(TEST_SECRET_KEY.into()),
            authon_api_url: api_url.clone(),
            webhook_secret: SecretString::new(TEST_WEBHOOK_SECRET.into()),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            json_logs: false,
        };

        let authon = Arc::new(
            AuthonBackend::new(AuthonConfig::new(TEST_SECRET_KEY).with_api_url(api_url.as_str()))
                .unwrap(),
        );

        let verifier = self.verifier.unwrap_or_else(|| {
            Arc::new(StaticTokenVerifier::new(
                TEST_ACCESS_TOKEN,
                create_test_user(|_| {}),
            ))
        });

        AppState {
            config: Arc::new(config),
            authon,
            verifier,
        }
    }
}
