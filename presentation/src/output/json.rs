//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use analyzer_domain::{AnalysisOutcome, Model};
use serde_json::json;

/// One JSON object per outcome: `{action, model, success, text}`
///
/// Failures add `error_kind`; `text` then carries the marked error message.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_value(outcome: &AnalysisOutcome, model: &Model) -> serde_json::Value {
        let mut value = json!({
            "action": outcome.action(),
            "model": model,
            "success": outcome.is_success(),
            "text": outcome.display_text(),
        });
        if let Some(kind) = outcome.failure_kind() {
            value["error_kind"] = json!(kind);
        }
        value
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &AnalysisOutcome, model: &Model) -> String {
        serde_json::to_string_pretty(&Self::to_value(outcome, model))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_domain::{AnalysisAction, FailureKind};

    #[test]
    fn test_completed_fields() {
        let outcome = AnalysisOutcome::completed(AnalysisAction::Answer, "B.Tech");
        let value = JsonFormatter::to_value(&outcome, &Model::Gemini25Flash);
        assert_eq!(
            value,
            json!({
                "action": "answer",
                "model": "gemini-2.5-flash",
                "success": true,
                "text": "B.Tech",
            })
        );
    }

    #[test]
    fn test_failure_carries_kind() {
        let outcome =
            AnalysisOutcome::failed(AnalysisAction::Summarize, FailureKind::Network, "timed out");
        let value = JsonFormatter::to_value(&outcome, &Model::Gemini25Flash);
        assert_eq!(value["success"], false);
        assert_eq!(value["text"], "Error: timed out");
        assert_eq!(value["error_kind"], "network");
    }
}
