//! Error types for the Gemini adapter

use crate::gemini::protocol::ApiErrorBody;
use analyzer_application::ports::llm_gateway::GatewayError;
use analyzer_domain::truncate;
use thiserror::Error;

/// Longest raw (non-JSON) error body kept in a message, in bytes
const MAX_RAW_BODY: usize = 300;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Invalid API key: {0}")]
    InvalidKey(String),

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Api {
        status: u16,
        api_status: String,
        reasons: Vec<String>,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    NoText(String),
}

impl GeminiError {
    /// Build an API error from the HTTP status and raw body.
    ///
    /// Bodies that do not follow the Google error envelope keep their raw
    /// text as the message, cut to [`MAX_RAW_BODY`] bytes.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<crate::gemini::protocol::ErrorEnvelope>(body) {
            Ok(envelope) => Self::from_api_body(status, envelope.error),
            Err(_) => GeminiError::Api {
                status,
                api_status: String::new(),
                reasons: Vec::new(),
                message: if body.trim().is_empty() {
                    format!("HTTP status {}", status)
                } else {
                    truncate(body.trim(), MAX_RAW_BODY)
                },
            },
        }
    }

    fn from_api_body(status: u16, body: ApiErrorBody) -> Self {
        let reasons = body.reasons().map(str::to_string).collect();
        GeminiError::Api {
            status,
            api_status: body.status,
            reasons,
            message: body.message,
        }
    }

    fn is_authentication(&self) -> bool {
        match self {
            GeminiError::Api {
                status, reasons, ..
            } => {
                matches!(status, 401 | 403)
                    || (*status == 400 && reasons.iter().any(|r| r == "API_KEY_INVALID"))
            }
            _ => false,
        }
    }

    fn is_rate_limited(&self) -> bool {
        match self {
            GeminiError::Api {
                status, api_status, ..
            } => *status == 429 || api_status == "RESOURCE_EXHAUSTED",
            _ => false,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeminiError::Timeout
        } else if err.is_decode() {
            GeminiError::Decode(err.to_string())
        } else {
            GeminiError::Transport(err.to_string())
        }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        if err.is_authentication() {
            return GatewayError::AuthenticationFailed(err.to_string());
        }
        if err.is_rate_limited() {
            return GatewayError::RateLimited(err.to_string());
        }
        match err {
            GeminiError::InvalidKey(_)
            | GeminiError::InvalidEndpoint { .. }
            | GeminiError::ClientBuild(_) => GatewayError::InitializationFailed(err.to_string()),
            GeminiError::Timeout | GeminiError::Transport(_) => {
                GatewayError::Network(err.to_string())
            }
            GeminiError::Decode(_) | GeminiError::NoText(_) => {
                GatewayError::MalformedResponse(err.to_string())
            }
            GeminiError::Api { .. } => GatewayError::RequestFailed(err.to_string()),
        }
    }
}
