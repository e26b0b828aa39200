//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use analyzer_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a request is in flight
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// `~/.local/share/doc-analyzer/history.txt` or the platform equivalent
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("doc-analyzer").join("history.txt"))
    }

    /// Expand a configured path, resolving a leading `~/`
    pub fn with_history_file(path: Option<&str>) -> Self {
        let history_file = match path {
            Some(p) => Some(expand_home(p)),
            None => Self::default_history_file(),
        };
        Self { history_file }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: Self::default_history_file(),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path_kept() {
        let config = ReplConfig::with_history_file(Some("/tmp/history.txt"));
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/history.txt")));
    }

    #[test]
    fn test_home_is_expanded() {
        let config = ReplConfig::with_history_file(Some("~/history.txt"));
        let path = config.history_file.unwrap();
        if dirs::home_dir().is_some() {
            assert!(!path.starts_with("~"));
            assert!(path.ends_with("history.txt"));
        }
    }
}
