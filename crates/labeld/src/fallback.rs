//! Deterministic fallbacks used when no backend session is configured.
//!
//! Suggestion and generation must keep working without a credential; the
//! rules here produce the same response shapes with fixed confidence values.
//! Extraction has no fallback.

use label_common::design::{DesignStatus, Element, Geometry, Variation};
use label_common::rpc::{GenerateDesignRequest, GenerateDesignResponse, SuggestTemplateResponse};
use label_common::template::TemplateType;
use serde_json::Map;

pub const SUGGESTION_CONFIDENCE: f64 = 0.7;
pub const GENERATION_CONFIDENCE: f64 = 0.6;

/// Keyword rules over the lowercased product type. The power+selectable
/// check runs before the broader selectable check so power-selectable
/// products are not swallowed by the CCT branch.
pub fn suggest_template(product_type: &str) -> SuggestTemplateResponse {
    let product_lower = product_type.to_lowercase();

    let template_type = if product_lower.contains("emergency") || product_lower.contains("exit") {
        TemplateType::Emergency
    } else if product_lower.contains("power") && product_lower.contains("selectable") {
        TemplateType::PowerSelectable
    } else if product_lower.contains("cct") || product_lower.contains("selectable") {
        TemplateType::CctSelectable
    } else {
        TemplateType::Standard
    };

    SuggestTemplateResponse {
        template_type,
        confidence: SUGGESTION_CONFIDENCE,
        reason: "Rule-based suggestion (OpenAI not configured)".to_string(),
    }
}

/// Single standard-layout variation whose geometry is computed from the
/// requested canvas dimensions, so the layout scales with canvas size.
pub fn generate_design(request: &GenerateDesignRequest) -> GenerateDesignResponse {
    let width = request.canvas_width as f64;
    let height = request.canvas_height as f64;

    let elements = vec![
        Element::Text {
            geometry: Geometry {
                x: 20.0,
                y: 20.0,
                width: width - 40.0,
                height: 40.0,
            },
            text: request.product_name.clone(),
            font_size: Some(24.0),
            fill: Some("#000000".to_string()),
            extra: Map::new(),
        },
        Element::Text {
            geometry: Geometry {
                x: 20.0,
                y: 70.0,
                width: width - 40.0,
                height: 30.0,
            },
            text: format!("Code: {}", request.product_code),
            font_size: Some(16.0),
            fill: Some("#666666".to_string()),
            extra: Map::new(),
        },
        Element::Rectangle {
            geometry: Geometry {
                x: 20.0,
                y: height - 120.0,
                width: 200.0,
                height: 80.0,
            },
            fill: Some("#f0f0f0".to_string()),
            stroke: Some("#000000".to_string()),
            stroke_width: Some(1.0),
            extra: Map::new(),
        },
        Element::Text {
            geometry: Geometry {
                x: 230.0,
                y: height - 100.0,
                width: width - 250.0,
                height: 60.0,
            },
            text: "Barcode placeholder - configure OpenAI for AI-generated designs".to_string(),
            font_size: Some(12.0),
            fill: Some("#999999".to_string()),
            extra: Map::new(),
        },
    ];

    GenerateDesignResponse {
        variations: vec![Variation {
            id: 1,
            layout_type: "standard".to_string(),
            description: "Standard left-aligned layout with product info and barcode".to_string(),
            elements,
            confidence: GENERATION_CONFIDENCE,
        }],
        status: DesignStatus::Fallback,
    }
}
