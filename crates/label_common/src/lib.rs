//! Label Common - shared types for the label AI service.
//!
//! Request/response shapes for the HTTP API, the design-layout model, the
//! template taxonomy, and the OpenAI wire types used by the daemon.

pub mod design;
pub mod error;
pub mod openai;
pub mod rpc;
pub mod template;

pub use design::*;
pub use error::*;
pub use rpc::*;
pub use template::*;
