use std::sync::Arc;

use authon_sdk::{AuthonBackend, SharedVerifier};

use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub authon: Arc<AuthonBackend>,
    /// Used by the auth middleware. Production wiring passes `authon` itself.
    pub verifier: SharedVerifier,
}
