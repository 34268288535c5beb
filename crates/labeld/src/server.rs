//! HTTP server for labeld.

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers. The credential store is the
/// only mutable piece; everything else lives per request.
pub struct AppState {
    pub credentials: CredentialStore,
}

impl AppState {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }
}

/// Build the router. Split out from `run` so tests can drive it directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server.
pub async fn run(config: Config) -> Result<()> {
    let credentials = CredentialStore::from_config(&config);
    let app = app(AppState::new(credentials));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("  Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
