//! Analysis outcomes
//!
//! Every request produces an [`AnalysisOutcome`]: either the model's text or
//! a classified failure whose message is shown in the model text's place.

use serde::{Deserialize, Serialize};

/// Prefix of every failure text shown in place of a model response
pub const ERROR_MARKER: &str = "Error:";

/// Which analysis produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisAction {
    Summarize,
    Answer,
}

impl AnalysisAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisAction::Summarize => "summarize",
            AnalysisAction::Answer => "answer",
        }
    }
}

/// Classification of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The handle could not be built from the credential
    Initialization,
    /// The service rejected the credential
    Authentication,
    /// Quota exhausted or rate limited
    RateLimited,
    /// The request never completed (DNS, connect, timeout)
    Network,
    /// The service answered but without usable text
    MalformedResponse,
    /// Any other error reported by the service
    Api,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Initialization => "initialization",
            FailureKind::Authentication => "authentication",
            FailureKind::RateLimited => "rate_limited",
            FailureKind::Network => "network",
            FailureKind::MalformedResponse => "malformed_response",
            FailureKind::Api => "api",
        }
    }

    /// Initialization failures are resolved by supplying a new credential
    pub fn needs_new_credential(&self) -> bool {
        matches!(self, FailureKind::Initialization | FailureKind::Authentication)
    }
}

/// Result of one summarize or answer request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Completed {
        action: AnalysisAction,
        text: String,
    },
    Failed {
        action: AnalysisAction,
        kind: FailureKind,
        message: String,
    },
}

impl AnalysisOutcome {
    pub fn completed(action: AnalysisAction, text: impl Into<String>) -> Self {
        Self::Completed {
            action,
            text: text.into(),
        }
    }

    pub fn failed(action: AnalysisAction, kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failed {
            action,
            kind,
            message: message.into(),
        }
    }

    pub fn action(&self) -> AnalysisAction {
        match self {
            Self::Completed { action, .. } | Self::Failed { action, .. } => *action,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Completed { .. } => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }

    /// Text to display: the model output, or the marked error message
    pub fn display_text(&self) -> String {
        match self {
            Self::Completed { text, .. } => text.clone(),
            Self::Failed { message, .. } => format!("{} {}", ERROR_MARKER, message),
        }
    }
}
