//! Label AI Service daemon.
//!
//! AI-assisted label creation: specification extraction, template
//! suggestion, and design generation backed by OpenAI, with deterministic
//! fallbacks when no key is configured.

use anyhow::Result;
use labeld::config::Config;
use labeld::server;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Label AI Service v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    match &config.api_key {
        Some(key) => info!("OpenAI key configured: {}", key.preview()),
        None => warn!(
            "OPENAI_API_KEY not set - extraction disabled, suggestion and generation run rule-based fallbacks"
        ),
    }

    server::run(config).await
}
