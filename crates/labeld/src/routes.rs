//! API routes for labeld.

use crate::credentials::Credential;
use crate::orchestrator;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use label_common::error::ServiceError;
use label_common::rpc::{
    ExtractSpecsRequest, ExtractSpecsResponse, GenerateDesignRequest, GenerateDesignResponse,
    HealthResponse, SuggestTemplateRequest, SuggestTemplateResponse, TestAiResponse,
    UpdateKeyRequest, UpdateKeyResponse,
};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/health", get(health))
        .route("/api/extract-specs", post(extract_specs))
        .route("/api/suggest-template", post(suggest_template))
        .route("/api/generate-design", post(generate_design))
        .route("/api/update-key", post(update_key))
        .route("/api/test-ai", get(test_ai))
}

fn service_error(err: ServiceError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "label-ai-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        openai_configured: state.credentials.has_live_session().await,
    })
}

async fn extract_specs(
    State(state): State<AppStateArc>,
    Json(req): Json<ExtractSpecsRequest>,
) -> Result<Json<ExtractSpecsResponse>, (StatusCode, String)> {
    orchestrator::extract_specifications(&state.credentials, &req)
        .await
        .map(Json)
        .map_err(|e| {
            error!("[X]  {}", e);
            service_error(e)
        })
}

async fn suggest_template(
    State(state): State<AppStateArc>,
    Json(req): Json<SuggestTemplateRequest>,
) -> Result<Json<SuggestTemplateResponse>, (StatusCode, String)> {
    info!("[T]  suggest-template for product: {}", req.product_type);

    orchestrator::suggest_template(&state.credentials, &req)
        .await
        .map(Json)
        .map_err(|e| {
            error!("[T]  {}", e);
            service_error(e)
        })
}

async fn generate_design(
    State(state): State<AppStateArc>,
    Json(req): Json<GenerateDesignRequest>,
) -> Result<Json<GenerateDesignResponse>, (StatusCode, String)> {
    orchestrator::generate_design(&state.credentials, &req)
        .await
        .map(Json)
        .map_err(|e| {
            error!("[D]  {}", e);
            service_error(e)
        })
}

/// Rotate the API key at runtime. Never an HTTP error: validation failure is
/// reported in-band and leaves the store untouched.
async fn update_key(
    State(state): State<AppStateArc>,
    Json(req): Json<UpdateKeyRequest>,
) -> Json<UpdateKeyResponse> {
    let credential = Credential::new(req.api_key);
    info!("[K]  update-key called with key {}", credential.preview());

    match state.credentials.replace(credential).await {
        Ok(_) => Json(UpdateKeyResponse {
            success: true,
            message: "API key updated and validated successfully".to_string(),
        }),
        Err(e) => {
            error!("[K]  key validation failed: {}", e);
            Json(UpdateKeyResponse {
                success: false,
                message: format!("Failed to validate API key: {}", e),
            })
        }
    }
}

async fn test_ai(State(state): State<AppStateArc>) -> Json<TestAiResponse> {
    let Some(session) = state.credentials.session().await else {
        return Json(TestAiResponse {
            success: false,
            message: "OpenAI API key is not configured".to_string(),
            configured: false,
            models_count: None,
        });
    };

    match session.validate().await {
        Ok(0) => Json(TestAiResponse {
            success: false,
            message: "OpenAI API returned empty response".to_string(),
            configured: true,
            models_count: None,
        }),
        Ok(count) => Json(TestAiResponse {
            success: true,
            message: "OpenAI API connection successful".to_string(),
            configured: true,
            models_count: Some(count),
        }),
        Err(e) => Json(TestAiResponse {
            success: false,
            message: format!("OpenAI API connection failed: {}", e),
            configured: true,
            models_count: None,
        }),
    }
}
