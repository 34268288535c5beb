//! Daemon configuration from the environment.
//!
//! Env-only by design: the service keeps no config file and persists
//! nothing, including the API key.

use crate::credentials::Credential;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-5-mini";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    /// Initial credential; absence is a supported degraded startup state.
    pub api_key: Option<Credential>,
}

impl Config {
    pub fn load() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Credential::new);

        let timeout_secs = std::env::var("LABELD_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            bind_addr: env_or("LABELD_BIND_ADDR", DEFAULT_BIND_ADDR),
            model: env_or("LABELD_MODEL", DEFAULT_MODEL),
            base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            request_timeout: Duration::from_secs(timeout_secs),
            api_key,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
