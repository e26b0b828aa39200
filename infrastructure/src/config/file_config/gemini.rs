//! Gemini configuration from TOML (`[gemini]` section)

use crate::credentials::{
    ChainedCredentialSource, DEFAULT_API_KEY_ENV, EnvCredentialSource, StaticCredentialSource,
};
use crate::gemini::gateway::{DEFAULT_BASE_URL, GeminiGatewayConfig};
use analyzer_domain::{Credential, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw Gemini configuration from TOML
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-pro"
/// api_key_env = "GOOGLE_API_KEY"
/// timeout_seconds = 60
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier, e.g. "gemini-2.5-flash"
    pub model: String,
    /// API host; overridden in tests or behind a proxy
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Key stored directly in the config file, consulted after the environment
    pub api_key: Option<String>,
    /// Per-request timeout; unset waits indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

// Hand-written so a key placed in the file never reaches logs
impl std::fmt::Debug for FileGeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileGeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl FileGeminiConfig {
    /// Parse the configured model name
    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.parse::<Model>();
        model
    }

    /// Gateway settings. A zero timeout is ignored rather than failing
    /// every request.
    pub fn gateway_config(&self) -> GeminiGatewayConfig {
        GeminiGatewayConfig {
            base_url: self.base_url.clone(),
            timeout: self
                .timeout_seconds
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Environment variable first, then the key from the config file
    pub fn credential_source(&self) -> ChainedCredentialSource {
        let file_key = self
            .api_key
            .as_deref()
            .and_then(|k| Credential::try_new(k).ok());

        ChainedCredentialSource::new()
            .with(EnvCredentialSource::new(&self.api_key_env))
            .with(StaticCredentialSource::new(
                file_key,
                "[gemini] api_key config value",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_application::ports::credential_source::CredentialSource;

    #[test]
    fn test_defaults() {
        let config = FileGeminiConfig::default();
        assert_eq!(config.parse_model(), Model::Gemini25Flash);
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gateway_config(), GeminiGatewayConfig::default());
    }

    #[test]
    fn test_custom_model_passes_through() {
        let config = FileGeminiConfig {
            model: "models/gemini-exp-1206".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.parse_model(),
            Model::Custom("gemini-exp-1206".to_string())
        );
    }

    #[test]
    fn test_timeout_converted() {
        let config = FileGeminiConfig {
            timeout_seconds: Some(30),
            ..Default::default()
        };
        assert_eq!(
            config.gateway_config().timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let config = FileGeminiConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        assert_eq!(config.gateway_config().timeout, None);
    }

    #[test]
    fn test_file_key_used_when_env_unset() {
        let config = FileGeminiConfig {
            api_key_env: "DOC_ANALYZER_TEST_UNSET_KEY_VAR".to_string(),
            api_key: Some("AIzaSyFromFile".to_string()),
            ..Default::default()
        };
        let source = config.credential_source();
        assert_eq!(source.resolve().unwrap().expose(), "AIzaSyFromFile");
    }

    #[test]
    fn test_missing_key_names_both_sources() {
        let config = FileGeminiConfig {
            api_key_env: "DOC_ANALYZER_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        let source = config.credential_source();
        assert!(source.resolve().is_none());
        let described = source.describe();
        assert!(described.contains("DOC_ANALYZER_TEST_UNSET_KEY_VAR"));
        assert!(described.contains("api_key"));
    }

    #[test]
    fn test_debug_masks_key() {
        let config = FileGeminiConfig {
            api_key: Some("AIzaSySecret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("AIzaSySecret"));
    }
}
