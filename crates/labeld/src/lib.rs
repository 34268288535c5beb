//! labeld - AI-assisted label creation service.
//!
//! HTTP daemon that turns product information into structured label data:
//! specification extraction, template suggestion, and design generation.
//! Reasoning is delegated to an OpenAI-compatible backend when a credential
//! is configured; suggestion and generation degrade to deterministic rules
//! without one.

pub mod confidence;
pub mod config;
pub mod credentials;
pub mod fallback;
pub mod openai;
pub mod orchestrator;
pub mod prompts;
pub mod routes;
pub mod server;
