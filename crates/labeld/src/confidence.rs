//! Confidence scoring and reply normalization.

use serde_json::Value;

pub const EXTRACTION_CONFIDENCE_CAP: f64 = 0.95;
pub const DEFAULT_VARIATION_CONFIDENCE: f64 = 0.8;

/// Confidence for an AI-backed extraction: more corroborated fields raise
/// trust, with a floor of 0.5 for any non-empty result and a hard cap.
pub fn extraction_confidence(field_count: usize) -> f64 {
    (0.5 + field_count as f64 * 0.1).min(EXTRACTION_CONFIDENCE_CAP)
}

/// Fill missing ids (sequential from 1) and confidences on the raw
/// variations array, so every variation deserializes fully populated no
/// matter how complete the backend reply was.
pub fn normalize_variations(variations: &mut [Value]) {
    for (i, variation) in variations.iter_mut().enumerate() {
        if let Value::Object(map) = variation {
            map.entry("id").or_insert_with(|| Value::from(i as u64 + 1));
            map.entry("confidence")
                .or_insert_with(|| Value::from(DEFAULT_VARIATION_CONFIDENCE));
        }
    }
}
