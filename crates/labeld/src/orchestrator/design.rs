//! Design-layout generation.

use super::backend_error;
use crate::confidence;
use crate::credentials::CredentialStore;
use crate::fallback;
use crate::openai::BackendError;
use crate::prompts;
use label_common::design::{DesignStatus, Variation};
use label_common::error::ServiceError;
use label_common::rpc::{GenerateDesignRequest, GenerateDesignResponse};
use serde_json::Value;
use tracing::info;

/// Generate design variations. Falls back to a single template-based layout
/// when no session is configured; never fails solely because the credential
/// is missing.
pub async fn generate_design(
    store: &CredentialStore,
    request: &GenerateDesignRequest,
) -> Result<GenerateDesignResponse, ServiceError> {
    let Some(session) = store.session().await else {
        info!(
            "[D]  no session, fallback design for '{}'",
            request.product_code
        );
        return Ok(fallback::generate_design(request));
    };

    let user_prompt = prompts::design_user_prompt(request);

    let mut reply = session
        .complete_structured(prompts::DESIGN_SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|e| backend_error("Design generation failed", e))?;

    let variations = normalize_design_reply(&mut reply)
        .map_err(|e| backend_error("Design generation failed", e))?;

    info!("[D]  generated {} variations", variations.len());

    Ok(GenerateDesignResponse {
        variations,
        status: DesignStatus::Success,
    })
}

/// Require the `variations` field, fill missing ids and confidences, then
/// deserialize into the typed model.
fn normalize_design_reply(reply: &mut Value) -> Result<Vec<Variation>, BackendError> {
    let variations = reply
        .get_mut("variations")
        .and_then(|v| v.as_array_mut())
        .ok_or(BackendError::MissingField("variations"))?;

    confidence::normalize_variations(variations);

    variations
        .iter()
        .cloned()
        .map(serde_json::from_value::<Variation>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(BackendError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_normalize_fills_ids_and_confidence() {
        let mut reply = json!({
            "variations": [
                {
                    "layout_type": "grid",
                    "description": "Grid layout with specs table",
                    "elements": [
                        {"type": "text", "x": 10, "y": 10, "width": 300, "height": 30,
                         "text": "SlimLine 600", "fontSize": 22}
                    ]
                },
                {
                    "id": 9,
                    "layout_type": "centered",
                    "description": "Centered layout",
                    "elements": [],
                    "confidence": 0.65
                }
            ]
        });

        let variations = normalize_design_reply(&mut reply).unwrap();
        assert_eq!(variations.len(), 2);
        assert_eq!(variations[0].id, 1);
        assert_relative_eq!(
            variations[0].confidence,
            confidence::DEFAULT_VARIATION_CONFIDENCE
        );
        assert_eq!(variations[1].id, 9);
        assert_relative_eq!(variations[1].confidence, 0.65);
    }

    #[test]
    fn test_missing_variations_field_is_an_error() {
        let mut reply = json!({"layouts": []});
        let err = normalize_design_reply(&mut reply).unwrap_err();
        assert!(matches!(err, BackendError::MissingField("variations")));
        assert!(err.to_string().contains("variations"));
    }

    #[test]
    fn test_malformed_variation_is_a_parse_error() {
        // Unknown element kind falls outside the closed schema.
        let mut reply = json!({
            "variations": [{
                "layout_type": "modern",
                "description": "bad element",
                "elements": [{"type": "hologram", "x": 0, "y": 0, "width": 1, "height": 1}]
            }]
        });

        let err = normalize_design_reply(&mut reply).unwrap_err();
        assert!(err.is_parse());
    }
}
