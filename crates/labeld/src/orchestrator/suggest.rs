//! Template suggestion.

use super::backend_error;
use crate::credentials::CredentialStore;
use crate::fallback;
use crate::prompts;
use label_common::error::ServiceError;
use label_common::rpc::{SuggestTemplateRequest, SuggestTemplateResponse};
use label_common::template::TemplateType;
use serde_json::Value;
use tracing::{info, warn};

/// Suggest a template type. Falls back to keyword rules when no session is
/// configured; never fails solely because the credential is missing.
pub async fn suggest_template(
    store: &CredentialStore,
    request: &SuggestTemplateRequest,
) -> Result<SuggestTemplateResponse, ServiceError> {
    let Some(session) = store.session().await else {
        info!(
            "[T]  no session, rule-based suggestion for '{}'",
            request.product_type
        );
        return Ok(fallback::suggest_template(&request.product_type));
    };

    let user_prompt = prompts::suggestion_user_prompt(
        &request.product_type,
        request.product_name.as_deref(),
        request.description.as_deref(),
    );

    let reply = session
        .complete_structured(prompts::SUGGESTION_SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|e| backend_error("Template suggestion failed", e))?;

    Ok(parse_suggestion_reply(&reply))
}

/// Tolerant reply parsing: direct deserialization first, then field-by-field
/// with defaults, in case the model strays from the requested shape.
fn parse_suggestion_reply(reply: &Value) -> SuggestTemplateResponse {
    if let Ok(parsed) = serde_json::from_value::<SuggestTemplateResponse>(reply.clone()) {
        return parsed;
    }

    let template_type = reply
        .get("template_type")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<TemplateType>().ok())
        .unwrap_or_else(|| {
            warn!("[T]  reply template_type missing or unknown, defaulting to standard");
            TemplateType::Standard
        });

    let confidence = reply
        .get("confidence")
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback::SUGGESTION_CONFIDENCE);

    let reason = reply
        .get("reason")
        .and_then(|v| v.as_str())
        .unwrap_or("AI suggestion")
        .to_string();

    SuggestTemplateResponse {
        template_type,
        confidence,
        reason,
    }
}
