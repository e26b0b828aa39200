//! Configuration file loading for doc-analyzer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment variables: `DOC_ANALYZER_GEMINI__MODEL=...`
//! 3. Project root: `./analyzer.toml` or `./.analyzer.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/doc-analyzer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
