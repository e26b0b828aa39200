//! Prompt templates for summarization and question answering
//!
//! The model's behavior is tied to the exact wording below (sentence count,
//! fallback sentence), so these strings must not be paraphrased.

use crate::{Document, Question};

/// Sentence the model must reply with when the document lacks the answer
pub const FALLBACK_ANSWER: &str = "I cannot find the answer in the provided text.";

/// Delimiter line separating the summary instruction from the document
pub const SUMMARY_DELIMITER: &str = "--- TEXT TO SUMMARIZE ---";

/// Delimiter line separating the Q&A instruction from the document
pub const ANSWER_DELIMITER: &str = "--- TEXT TO CONSULT ---";

const SUMMARY_INSTRUCTION: &str = "You are an expert summarizer. Take the following text, which appears to be a resume, \
and summarize the candidate's key skills, top projects, and major achievements into \
exactly three clear, concise sentences. Do not add any introduction or concluding remarks.";

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for a three-sentence summary of the document
    pub fn summary(document: &Document) -> String {
        format!(
            "{}\n\n{}\n{}",
            SUMMARY_INSTRUCTION,
            SUMMARY_DELIMITER,
            document.text()
        )
    }

    /// Prompt for answering a question strictly from the document
    pub fn answer(document: &Document, question: &Question) -> String {
        format!(
            "You are an expert question-answering system. Based *only* on the text provided below, \
answer the following question: **{}**.\n\
If the answer is not present in the text, you must respond ONLY with: '{}' \
Keep your answer concise and direct.\n\n{}\n{}",
            question.content(),
            FALLBACK_ANSWER,
            ANSWER_DELIMITER,
            document.text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::try_new(text).unwrap()
    }

    #[test]
    fn test_summary_contains_document_verbatim() {
        let text = "Skills• Rust, SQL\n\n  Projects: log search  \r\n";
        let prompt = PromptTemplate::summary(&doc(text));
        assert!(prompt.contains(text));
        assert!(prompt.ends_with(text));
    }

    #[test]
    fn test_summary_demands_three_sentences() {
        let prompt = PromptTemplate::summary(&doc("anything"));
        assert!(prompt.contains("exactly three clear, concise sentences"));
        assert!(prompt.contains("Do not add any introduction or concluding remarks."));
        assert!(!prompt.contains(FALLBACK_ANSWER));
    }

    #[test]
    fn test_summary_instruction_precedes_delimiter() {
        let prompt = PromptTemplate::summary(&doc("payload"));
        let instruction_end = prompt.find("remarks.").unwrap();
        let delimiter = prompt.find(SUMMARY_DELIMITER).unwrap();
        let payload = prompt.rfind("payload").unwrap();
        assert!(instruction_end < delimiter);
        assert!(delimiter < payload);
        assert!(prompt.contains(&format!("remarks.\n\n{}\npayload", SUMMARY_DELIMITER)));
    }

    #[test]
    fn test_answer_contains_document_question_and_fallback() {
        let text = "Education: B.Tech, CGPA 8.4";
        let question = Question::try_new("What is the CGPA?").unwrap();
        let prompt = PromptTemplate::answer(&doc(text), &question);
        assert!(prompt.contains(text));
        assert!(prompt.contains("**What is the CGPA?**."));
        assert!(prompt.contains("I cannot find the answer in the provided text."));
        assert!(prompt.contains(&format!("{}\n{}", ANSWER_DELIMITER, text)));
    }

    #[test]
    fn test_answer_wording() {
        let question = Question::try_new("Q").unwrap();
        let prompt = PromptTemplate::answer(&doc("D"), &question);
        assert_eq!(
            prompt,
            "You are an expert question-answering system. Based *only* on the text provided below, \
answer the following question: **Q**.\n\
If the answer is not present in the text, you must respond ONLY with: \
'I cannot find the answer in the provided text.' Keep your answer concise and direct.\
\n\n--- TEXT TO CONSULT ---\nD"
        );
    }

    #[test]
    fn test_builders_are_deterministic() {
        let d = doc("same text");
        assert_eq!(PromptTemplate::summary(&d), PromptTemplate::summary(&d));
    }
}
