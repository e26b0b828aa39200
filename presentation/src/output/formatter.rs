//! Output formatter trait

use analyzer_domain::{AnalysisOutcome, Model, OutputFormat};

/// Trait for rendering one analysis outcome
pub trait OutputFormatter {
    fn format(&self, outcome: &AnalysisOutcome, model: &Model) -> String;
}

/// Pick the formatter for a configured output format
pub fn for_format(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
