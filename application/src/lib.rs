//! Application layer for doc-analyzer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::AnalysisParams;
pub use ports::{
    credential_source::{CredentialSource, MissingCredentialError, require_credential},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::analyze_document::AnalyzeDocumentUseCase;
pub use use_cases::session_controller::{Reply, SessionContext, SessionController, SessionError};
