//! HTTP API request/response types for the label AI service.

use crate::design::{DesignStatus, Variation};
use crate::template::TemplateType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_num_variations() -> u32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub openai_configured: bool,
}

/// Request to extract specifications from free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractSpecsRequest {
    pub text: String,
    #[serde(default)]
    pub product_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractSpecsResponse {
    pub specifications: Map<String, Value>,
    pub confidence: f64,
}

/// Request for a template recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestTemplateRequest {
    pub product_type: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestTemplateResponse {
    pub template_type: TemplateType,
    pub confidence: f64,
    pub reason: String,
}

/// Request for label design variations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDesignRequest {
    pub product_name: String,
    pub product_code: String,
    pub template_type: String,
    pub specifications: Map<String, Value>,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default = "default_num_variations")]
    pub num_variations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDesignResponse {
    pub variations: Vec<Variation>,
    pub status: DesignStatus,
}

/// Runtime API key rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateKeyRequest {
    pub api_key: String,
}

/// Key rotation outcome. Validation failure is reported in-band, never as an
/// HTTP error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateKeyResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestAiResponse {
    pub success: bool,
    pub message: String,
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models_count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_request_defaults() {
        let req: GenerateDesignRequest = serde_json::from_str(
            r#"{
                "product_name": "LED Panel",
                "product_code": "LP-600",
                "template_type": "standard",
                "specifications": {}
            }"#,
        )
        .unwrap();

        assert_eq!(req.canvas_width, 800);
        assert_eq!(req.canvas_height, 600);
        assert_eq!(req.num_variations, 3);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let req: SuggestTemplateRequest =
            serde_json::from_str(r#"{"product_type": "Downlight"}"#).unwrap();
        assert!(req.product_name.is_none());
        assert!(req.description.is_none());

        let req: ExtractSpecsRequest = serde_json::from_str(r#"{"text": "IP65"}"#).unwrap();
        assert!(req.product_type.is_none());
    }

    #[test]
    fn test_models_count_omitted_when_absent() {
        let response = TestAiResponse {
            success: false,
            message: "OpenAI API key is not configured".to_string(),
            configured: false,
            models_count: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("models_count"));
    }
}
