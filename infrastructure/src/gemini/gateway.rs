//! Gemini LLM Gateway implementation

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::session::GeminiSession;
use analyzer_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use analyzer_domain::{Credential, Model};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::info;

/// Public Gemini API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings shared by every session the gateway creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiGatewayConfig {
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GeminiGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// LLM Gateway implementation for the Gemini REST API
///
/// `initialize` does no network I/O: it validates the key, builds the HTTP
/// client and resolves the endpoint URL. Key rejection by the service only
/// surfaces on the first `complete` call.
#[derive(Debug, Clone, Default)]
pub struct GeminiLlmGateway {
    config: GeminiGatewayConfig,
}

impl GeminiLlmGateway {
    pub fn new(config: GeminiGatewayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeminiGatewayConfig {
        &self.config
    }

    fn endpoint(&self, model: &Model) -> Result<reqwest::Url> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        );
        reqwest::Url::parse(&url).map_err(|e| GeminiError::InvalidEndpoint {
            url,
            reason: e.to_string(),
        })
    }

    fn build_client(&self, credential: &Credential) -> Result<reqwest::Client> {
        let secret = credential.expose();
        if secret.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(GeminiError::InvalidKey(
                "the key contains whitespace or control characters".to_string(),
            ));
        }

        let mut key = HeaderValue::from_str(secret).map_err(|_| {
            GeminiError::InvalidKey("the key contains characters not allowed in a header".into())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn initialize(
        &self,
        credential: &Credential,
        model: &Model,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        let endpoint = self.endpoint(model)?;
        let client = self.build_client(credential)?;

        info!(
            model = %model,
            key = %credential.masked(),
            "Gemini session initialized"
        );

        Ok(Box::new(GeminiSession::new(client, endpoint, model.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(key: &str) -> Credential {
        Credential::try_new(key).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_builds_endpoint() {
        let gateway = GeminiLlmGateway::default();
        let session = gateway
            .initialize(&credential("AIzaSyExampleKey"), &Model::Gemini25Flash)
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gemini25Flash);

        let endpoint = gateway.endpoint(&Model::Gemini25Flash).unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(endpoint.query().is_none());
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let gateway = GeminiLlmGateway::new(GeminiGatewayConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout: None,
        });
        let endpoint = gateway
            .endpoint(&Model::Custom("my-model".to_string()))
            .unwrap();
        assert_eq!(
            endpoint.as_str(),
            "http://localhost:8080/v1beta/models/my-model:generateContent"
        );
    }

    #[tokio::test]
    async fn test_key_with_whitespace_is_initialization_failure() {
        let gateway = GeminiLlmGateway::default();
        let err = gateway
            .initialize(&credential("AIza Sy"), &Model::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::InitializationFailed(_)));
    }

    #[tokio::test]
    async fn test_non_ascii_key_is_initialization_failure() {
        let gateway = GeminiLlmGateway::default();
        let err = gateway
            .initialize(&credential("clé-secrète"), &Model::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::InitializationFailed(_)));
    }

    #[tokio::test]
    async fn test_bad_base_url_is_initialization_failure() {
        let gateway = GeminiLlmGateway::new(GeminiGatewayConfig {
            base_url: "not a url".to_string(),
            timeout: None,
        });
        let err = gateway
            .initialize(&credential("AIzaSyExampleKey"), &Model::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::InitializationFailed(_)));
    }
}
