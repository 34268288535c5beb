//! Specification extraction from free text.

use super::{backend_error, json_type_name};
use crate::confidence;
use crate::credentials::CredentialStore;
use crate::prompts;
use label_common::error::ServiceError;
use label_common::rpc::{ExtractSpecsRequest, ExtractSpecsResponse};
use serde_json::Value;
use tracing::info;

/// Extract technical specifications via the backend. Strictly requires a
/// live session; there is no deterministic fallback for extraction.
pub async fn extract_specifications(
    store: &CredentialStore,
    request: &ExtractSpecsRequest,
) -> Result<ExtractSpecsResponse, ServiceError> {
    let Some(session) = store.session().await else {
        return Err(ServiceError::ServiceUnavailable);
    };

    let user_prompt =
        prompts::extraction_user_prompt(&request.text, request.product_type.as_deref());

    let reply = session
        .complete_structured(prompts::EXTRACTION_SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|e| backend_error("AI extraction failed", e))?;

    let specifications = match reply {
        Value::Object(map) => map,
        other => {
            return Err(ServiceError::ReplyParse(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let confidence = confidence::extraction_confidence(specifications.len());
    info!(
        "[X]  extracted {} fields (confidence {:.2})",
        specifications.len(),
        confidence
    );

    Ok(ExtractSpecsResponse {
        specifications,
        confidence,
    })
}
