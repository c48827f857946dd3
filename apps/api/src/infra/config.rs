use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    /// Server-side Authon secret key (e.g., "sk_live_...").
    pub authon_secret_key: SecretString,
    /// Base URL of the Authon API.
    pub authon_api_url: Url,
    /// Signing secret of the webhook endpoint configured in the Authon dashboard.
    pub webhook_secret: SecretString,
    pub bind_addr: SocketAddr,
    /// Emit JSON logs instead of the pretty console format.
    pub json_logs: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let authon_secret_key =
            SecretString::new(get_env::<String>("AUTHON_SECRET_KEY").into_boxed_str());
        let webhook_secret =
            SecretString::new(get_env::<String>("AUTHON_WEBHOOK_SECRET").into_boxed_str());

        let authon_api_url: Url = get_env_default(
            "AUTHON_API_URL",
            authon_sdk::DEFAULT_API_URL
                .parse()
                .expect("default Authon API URL is valid"),
        );
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let log_format: String = get_env_default("LOG_FORMAT", "pretty".to_string());

        Self {
            authon_secret_key,
            authon_api_url,
            webhook_secret,
            bind_addr,
            json_logs: log_format.eq_ignore_ascii_case("json"),
        }
    }
}
