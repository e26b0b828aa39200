//! Prompt domain
//!
//! Templates for the summarization and question-answering requests.

mod template;

pub use template::{ANSWER_DELIMITER, FALLBACK_ANSWER, PromptTemplate, SUMMARY_DELIMITER};
