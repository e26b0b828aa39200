//! Analyze Document use case
//!
//! Builds the summary or answer prompt, sends it through an initialized
//! session, and converts whatever comes back into an [`AnalysisOutcome`].
//! Gateway failures never escape as errors; they become failed outcomes.

use crate::config::AnalysisParams;
use crate::ports::llm_gateway::LlmSession;
use crate::ports::progress::ProgressNotifier;
use analyzer_domain::{AnalysisAction, AnalysisOutcome, Document, PromptTemplate, Question};
use tracing::{debug, info, warn};

/// Use case for summarizing a document or answering a question about it
#[derive(Debug, Clone, Default)]
pub struct AnalyzeDocumentUseCase {
    params: AnalysisParams,
}

impl AnalyzeDocumentUseCase {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Produce a three-sentence summary of the document
    pub async fn summarize(
        &self,
        session: &dyn LlmSession,
        document: &Document,
        progress: &dyn ProgressNotifier,
    ) -> AnalysisOutcome {
        let prompt = PromptTemplate::summary(document);
        self.run(session, AnalysisAction::Summarize, &prompt, progress)
            .await
    }

    /// Answer a question using only the document's content
    pub async fn answer(
        &self,
        session: &dyn LlmSession,
        document: &Document,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> AnalysisOutcome {
        let prompt = PromptTemplate::answer(document, question);
        self.run(session, AnalysisAction::Answer, &prompt, progress)
            .await
    }

    async fn run(
        &self,
        session: &dyn LlmSession,
        action: AnalysisAction,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> AnalysisOutcome {
        debug!(
            action = action.as_str(),
            model = %session.model(),
            prompt_len = prompt.len(),
            "Dispatching request"
        );
        progress.on_request_start(action, session.model());

        let outcome = match session.complete(prompt, self.params.temperature).await {
            Ok(text) => {
                info!(action = action.as_str(), "Request completed");
                AnalysisOutcome::completed(action, text)
            }
            Err(e) => {
                warn!(action = action.as_str(), kind = e.kind().as_str(), "Request failed: {}", e);
                AnalysisOutcome::failed(action, e.kind(), e.to_string())
            }
        };

        progress.on_request_complete(action, outcome.is_success());
        outcome
    }
}
