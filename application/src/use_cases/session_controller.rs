//! Session controller
//!
//! Holds one session's document, credential and cached handle, and turns
//! user commands into analysis requests. All three front ends (batch,
//! interactive loop, form) drive the same controller.
//!
//! ```text
//! AwaitingDocument ──load_document──> Ready ──summarize/ask──> Ready
//!                                       └──exit──> Terminated
//! ```

use crate::config::AnalysisParams;
use crate::ports::llm_gateway::{LlmGateway, LlmSession};
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::analyze_document::AnalyzeDocumentUseCase;
use analyzer_domain::{
    AnalysisAction, AnalysisOutcome, Command, Credential, Document, FailureKind, Question,
    SessionState,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Misuse of the controller lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A document has already been loaded for this session")]
    DocumentAlreadyLoaded,

    #[error("The session has ended")]
    Terminated,
}

/// What the front end should show after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The request was dispatched; show the result (which may be a failure)
    Outcome(AnalysisOutcome),
    /// Nothing was dispatched because no API key is set
    CredentialRequired(String),
    /// The command was rejected locally
    Rejected(String),
    /// The session has terminated
    Exited,
}

/// Session-scoped state: at most one credential and the handle built from it
///
/// Nothing in here is shared between sessions. Replacing the credential
/// drops the cached handle so the next request re-initializes.
#[derive(Default)]
pub struct SessionContext {
    credential: Option<Credential>,
    handle: Option<Box<dyn LlmSession>>,
    document: Option<Document>,
}

impl SessionContext {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            credential,
            handle: None,
            document: None,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Whether a handle has been initialized and cached
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    fn set_credential(&mut self, credential: Credential) {
        self.handle = None;
        self.credential = Some(credential);
    }
}

/// Drives one analysis session
pub struct SessionController<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    use_case: AnalyzeDocumentUseCase,
    context: SessionContext,
    state: SessionState,
}

impl<G: LlmGateway + 'static> SessionController<G> {
    /// Create a new controller
    pub fn new(gateway: Arc<G>, params: AnalysisParams, credential: Option<Credential>) -> Self {
        Self {
            gateway,
            use_case: AnalyzeDocumentUseCase::new(params),
            context: SessionContext::new(credential),
            state: SessionState::AwaitingDocument,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn params(&self) -> &AnalysisParams {
        self.use_case.params()
    }

    /// Replace the session's credential, invalidating any cached handle
    pub fn set_credential(&mut self, credential: Credential) {
        info!("API key updated ({})", credential.masked());
        self.context.set_credential(credential);
    }

    /// Supply the document. Allowed exactly once per session.
    pub fn load_document(&mut self, document: Document) -> Result<(), SessionError> {
        match self.state {
            SessionState::AwaitingDocument => {
                debug!(chars = document.char_count(), "Document loaded");
                self.context.document = Some(document);
                self.state = SessionState::Ready;
                Ok(())
            }
            SessionState::Terminated => Err(SessionError::Terminated),
            _ => Err(SessionError::DocumentAlreadyLoaded),
        }
    }

    /// Parse a line of user input and dispatch it
    pub async fn handle_input(&mut self, input: &str, progress: &dyn ProgressNotifier) -> Reply {
        match Command::parse(input) {
            Some(command) => self.dispatch(command, progress).await,
            None => Reply::Rejected(format!(
                "Unknown command: '{}'. Choose summarize, ask or exit.",
                input.trim()
            )),
        }
    }

    /// Dispatch one command
    pub async fn dispatch(&mut self, command: Command, progress: &dyn ProgressNotifier) -> Reply {
        if self.state.is_terminated() {
            return Reply::Rejected(SessionError::Terminated.to_string());
        }

        match command {
            Command::Exit => {
                info!("Session terminated");
                self.state = SessionState::Terminated;
                Reply::Exited
            }
            _ if self.state == SessionState::AwaitingDocument => {
                Reply::Rejected("No document loaded yet.".to_string())
            }
            Command::Summarize => self.summarize(progress).await,
            Command::Ask(question) => self.ask(&question, progress).await,
        }
    }

    async fn summarize(&mut self, progress: &dyn ProgressNotifier) -> Reply {
        if let Err(reply) = self.ensure_handle(AnalysisAction::Summarize).await {
            return reply;
        }

        self.state = SessionState::Summarizing;
        let outcome = match (self.context.handle.as_deref(), self.context.document.as_ref()) {
            (Some(handle), Some(document)) => {
                self.use_case.summarize(handle, document, progress).await
            }
            _ => not_ready(AnalysisAction::Summarize),
        };
        self.state = SessionState::Ready;

        Reply::Outcome(outcome)
    }

    async fn ask(&mut self, question: &str, progress: &dyn ProgressNotifier) -> Reply {
        let question = match Question::try_new(question) {
            Ok(q) => q,
            Err(e) => return Reply::Rejected(e.to_string()),
        };

        if let Err(reply) = self.ensure_handle(AnalysisAction::Answer).await {
            return reply;
        }

        self.state = SessionState::Answering;
        let outcome = match (self.context.handle.as_deref(), self.context.document.as_ref()) {
            (Some(handle), Some(document)) => {
                self.use_case
                    .answer(handle, document, &question, progress)
                    .await
            }
            _ => not_ready(AnalysisAction::Answer),
        };
        self.state = SessionState::Ready;

        Reply::Outcome(outcome)
    }

    /// Make sure a handle exists, initializing it from the credential if needed
    async fn ensure_handle(&mut self, action: AnalysisAction) -> Result<(), Reply> {
        if self.context.handle.is_some() {
            return Ok(());
        }

        let Some(credential) = self.context.credential.as_ref() else {
            return Err(Reply::CredentialRequired(
                "Please set a valid Gemini API key to proceed with analysis.".to_string(),
            ));
        };

        let model = &self.use_case.params().model;
        match self.gateway.initialize(credential, model).await {
            Ok(handle) => {
                info!(model = %model, "Client initialized");
                self.context.handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                warn!("Client initialization failed: {}", e);
                Err(Reply::Outcome(AnalysisOutcome::failed(
                    action,
                    FailureKind::Initialization,
                    e.to_string(),
                )))
            }
        }
    }
}

/// Fallback when the handle or document is missing after `ensure_handle`
fn not_ready(action: AnalysisAction) -> AnalysisOutcome {
    AnalysisOutcome::failed(
        action,
        FailureKind::Initialization,
        "session is not ready".to_string(),
    )
}
