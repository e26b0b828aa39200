//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please paste text into the document input area.")]
    EmptyDocument,

    #[error("Please enter a question.")]
    EmptyQuestion,

    #[error("API key cannot be empty")]
    EmptyCredential,
}

impl DomainError {
    /// Check if this error is a user input problem that can be fixed by re-entering a value
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::EmptyDocument | DomainError::EmptyQuestion)
    }
}
