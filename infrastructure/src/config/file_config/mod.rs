//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod repl;

pub use gemini::FileGeminiConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0 (ignored; requests will not time out)")]
    InvalidTimeout,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("gemini.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("gemini.api_key is set but blank")]
    BlankApiKey,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model service settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive loop settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are warnings: the caller logs them and carries on.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let gemini = &self.gemini;

        if gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if gemini.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        if gemini.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            issues.push(ConfigValidationError::BlankApiKey);
        }
        if gemini.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-pro"
base_url = "http://localhost:8080"
api_key_env = "GOOGLE_API_KEY"
timeout_seconds = 45

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/doc-analyzer/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.parse_model(), Model::Gemini25Pro);
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(config.gemini.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.gemini.timeout_seconds, Some(45));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.local/share/doc-analyzer/history.txt")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.0-flash"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.parse_model(), Model::Gemini20Flash);
        // Defaults should apply
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.gemini.api_key.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[gemini]
model = ""
api_key_env = " "
api_key = ""
timeout_seconds = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::EmptyApiKeyEnv,
                ConfigValidationError::BlankApiKey,
                ConfigValidationError::InvalidTimeout,
            ]
        );
    }
}
