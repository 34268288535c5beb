//! Error taxonomy for the label AI service.
//!
//! Every failure is scoped to the request that triggered it. Credential
//! validation failures on the update-key path are reported in-band and never
//! pass through this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Extraction called without a live backend session.
    #[error("OpenAI service is not configured")]
    ServiceUnavailable,

    /// The backend replied, but not with parseable structured JSON.
    #[error("Failed to parse AI response: {0}")]
    ReplyParse(String),

    /// Any other backend failure, with the backend's message embedded.
    #[error("{context}: {message}")]
    Backend { context: String, message: String },
}

impl ServiceError {
    /// HTTP status this error maps to.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::ServiceUnavailable => 503,
            ServiceError::ReplyParse(_) => 500,
            ServiceError::Backend { .. } => 500,
        }
    }
}
