//! Document domain
//!
//! The text under analysis. A [`Document`] is created once per session and
//! only ever read afterwards.

pub mod sample;

use crate::core::error::DomainError;
use serde::Serialize;

/// The text under analysis (Value Object)
///
/// Holds the text exactly as supplied: no trimming, truncation or
/// re-encoding, so prompt builders can embed it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document, rejecting empty or whitespace-only text
    pub fn try_new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyDocument);
        }
        Ok(Self { text })
    }

    /// Use the supplied text, or fall back to the built-in sample when it is blank
    ///
    /// Returns the document and whether the sample was substituted.
    pub fn or_sample(text: Option<&str>) -> (Self, bool) {
        match text.map(Self::try_new) {
            Some(Ok(doc)) => (doc, false),
            _ => (Self::sample(), true),
        }
    }

    /// The built-in sample resume
    pub fn sample() -> Self {
        Self {
            text: sample::SAMPLE_RESUME.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters, for status lines
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_rejected() {
        assert_eq!(Document::try_new(""), Err(DomainError::EmptyDocument));
        assert_eq!(Document::try_new(" \n "), Err(DomainError::EmptyDocument));
    }

    #[test]
    fn test_text_kept_verbatim() {
        let raw = "  leading spaces\r\nand • bullets\t";
        let doc = Document::try_new(raw).unwrap();
        assert_eq!(doc.text(), raw);
    }

    #[test]
    fn test_or_sample_substitutes_blank_input() {
        let (doc, substituted) = Document::or_sample(Some("   "));
        assert!(substituted);
        assert_eq!(doc, Document::sample());

        let (doc, substituted) = Document::or_sample(None);
        assert!(substituted);
        assert_eq!(doc.text(), sample::SAMPLE_RESUME);
    }

    #[test]
    fn test_or_sample_keeps_user_text() {
        let (doc, substituted) = Document::or_sample(Some("My resume"));
        assert!(!substituted);
        assert_eq!(doc.text(), "My resume");
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        let doc = Document::try_new("•ab").unwrap();
        assert_eq!(doc.char_count(), 3);
    }
}
