//! Gemini session implementation

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse};
use analyzer_application::ports::llm_gateway::{GatewayError, LlmSession};
use analyzer_domain::Model;
use async_trait::async_trait;
use tracing::{debug, warn};

/// An initialized handle bound to one key and one model
pub struct GeminiSession {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    model: Model,
}

impl GeminiSession {
    pub(crate) fn new(client: reqwest::Client, endpoint: reqwest::Url, model: Model) -> Self {
        Self {
            client,
            endpoint,
            model,
        }
    }

    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt, temperature);

        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            temperature,
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::from_response(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Decode(e.to_string()))?;

        let text = parsed
            .text()
            .ok_or_else(|| GeminiError::NoText(parsed.missing_text_reason()))?;

        debug!(response_chars = text.chars().count(), "Received response");
        Ok(text)
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> std::result::Result<String, GatewayError> {
        self.generate(prompt, temperature).await.map_err(|e| {
            warn!(model = %self.model, error = %e, "generateContent failed");
            GatewayError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::gemini::gateway::{GeminiGatewayConfig, GeminiLlmGateway};
    use analyzer_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
    use analyzer_domain::{Credential, Model};
    use mockito::Matcher;
    use serde_json::json;

    const KEY: &str = "AIzaSyTestKey0123";
    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    async fn session_for(base_url: String) -> Box<dyn LlmSession> {
        let gateway = GeminiLlmGateway::new(GeminiGatewayConfig {
            base_url,
            timeout: None,
        });
        gateway
            .initialize(&Credential::try_new(KEY).unwrap(), &Model::Gemini25Flash)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_complete_returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", KEY)
            .match_body(Matcher::PartialJson(json!({
                "contents": [{"parts": [{"text": "Summarize this"}]}],
                "generationConfig": {"temperature": 0.1}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"A concise summary."}]},"finishReason":"STOP"}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        let text = session.complete("Summarize this", 0.1).await.unwrap();

        assert_eq!(text, "A concise summary.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_key_never_in_query_string() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        session.complete("prompt", 0.1).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_key_is_authentication_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(400)
            .with_body(
                r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"API_KEY_INVALID"}]}}"#,
            )
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        let err = session.complete("prompt", 0.1).await.unwrap_err();
        assert!(matches!(err, GatewayError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_quota_exhausted_is_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(429)
            .with_body(
                r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#,
            )
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        let err = session.complete("prompt", 0.1).await.unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited(_)));
        assert!(err.to_string().contains("Resource has been exhausted"));
    }

    #[tokio::test]
    async fn test_server_error_is_request_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body(r#"{"error":{"code":500,"message":"Internal error encountered.","status":"INTERNAL"}}"#)
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        let err = session.complete("prompt", 0.1).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::RequestFailed("HTTP 500: Internal error encountered.".to_string())
        );
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        let err = session.complete("prompt", 0.1).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::MalformedResponse("prompt was blocked (SAFETY)".to_string())
        );
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let session = session_for(server.url()).await;
        let err = session.complete("prompt", 0.1).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        // Port 9 (discard) on loopback is not listening in test environments
        let session = session_for("http://127.0.0.1:9".to_string()).await;
        let err = session.complete("prompt", 0.1).await.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));
    }

    #[tokio::test]
    async fn test_session_keeps_model() {
        let server = mockito::Server::new_async().await;
        let gateway = GeminiLlmGateway::new(GeminiGatewayConfig {
            base_url: server.url(),
            timeout: None,
        });
        let session = gateway
            .initialize(&Credential::try_new(KEY).unwrap(), &Model::Gemini25Flash)
            .await
            .unwrap();
        assert_eq!(session.model().as_str(), "gemini-2.5-flash");
    }
}
