//! Session lifecycle states

use serde::{Deserialize, Serialize};

/// Lifecycle of an analysis session
///
/// ```text
/// AwaitingDocument ──load──> Ready ──summarize──> Summarizing ──> Ready
///                              │ └────ask───────> Answering ────> Ready
///                              └──exit──> Terminated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No document yet; analysis commands are rejected
    #[default]
    AwaitingDocument,
    /// Document held, waiting for the next command
    Ready,
    /// A summary request is in flight
    Summarizing,
    /// A question request is in flight
    Answering,
    /// The user chose to exit
    Terminated,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::AwaitingDocument => "awaiting_document",
            SessionState::Ready => "ready",
            SessionState::Summarizing => "summarizing",
            SessionState::Answering => "answering",
            SessionState::Terminated => "terminated",
        }
    }

    /// Whether the session has ended
    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_awaits_document() {
        assert_eq!(SessionState::default(), SessionState::AwaitingDocument);
    }

    #[test]
    fn test_only_terminated_is_terminal() {
        assert!(SessionState::Terminated.is_terminated());
        assert!(!SessionState::Ready.is_terminated());
        assert!(!SessionState::Answering.is_terminated());
    }
}
