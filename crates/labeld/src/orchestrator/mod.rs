//! Task orchestrators, one per API operation.
//!
//! Each request either runs against the live backend session or, for
//! suggestion and generation, the deterministic fallback when no session is
//! configured at request time. Mid-call backend failures surface as errors
//! on every path; only the missing-session case falls back. Extraction has
//! no fallback at all.

mod design;
mod extract;
mod suggest;

pub use design::generate_design;
pub use extract::extract_specifications;
pub use suggest::suggest_template;

use crate::openai::BackendError;
use label_common::error::ServiceError;

/// Map a backend failure into the service taxonomy: parse failures keep
/// their parse-specific message, everything else embeds the backend message
/// under the task's context line.
fn backend_error(context: &str, err: BackendError) -> ServiceError {
    if err.is_parse() {
        ServiceError::ReplyParse(err.to_string())
    } else {
        ServiceError::Backend {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_mapping() {
        let parse = BackendError::Parse(
            serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        );
        assert!(matches!(
            backend_error("AI extraction failed", parse),
            ServiceError::ReplyParse(_)
        ));

        let api = BackendError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        let mapped = backend_error("Design generation failed", api);
        assert!(mapped.to_string().starts_with("Design generation failed"));
        assert!(mapped.to_string().contains("rate limited"));
    }
}
