//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation service.
//! A gateway turns a credential into a session handle; the handle performs
//! one blocking round trip per `complete` call.

use analyzer_domain::{Credential, FailureKind, Model};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The handle could not be constructed (malformed key, client setup failure)
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("The API key was rejected: {0}")]
    AuthenticationFailed(String),

    #[error("Quota or rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("API error during generation: {0}")]
    RequestFailed(String),
}

impl GatewayError {
    /// Map onto the domain failure classification
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::InitializationFailed(_) => FailureKind::Initialization,
            GatewayError::AuthenticationFailed(_) => FailureKind::Authentication,
            GatewayError::RateLimited(_) => FailureKind::RateLimited,
            GatewayError::Network(_) => FailureKind::Network,
            GatewayError::MalformedResponse(_) => FailureKind::MalformedResponse,
            GatewayError::RequestFailed(_) => FailureKind::Api,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the model service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Build a session handle bound to one credential.
    ///
    /// Implementations may defer real validation of the key until the first
    /// `complete` call, but must report construction problems as
    /// [`GatewayError::InitializationFailed`].
    async fn initialize(
        &self,
        credential: &Credential,
        model: &Model,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An initialized handle to the model service
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send one prompt and wait for the full response text.
    ///
    /// Exactly one request per call: no retry, no streaming.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, GatewayError>;
}
