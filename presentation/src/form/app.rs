//! Form main loop
//!
//! Owns the terminal and one `SessionController`. Requests are awaited
//! inline: the form shows "Working..." and accepts no input until the
//! reply arrives.

use super::render::render;
use super::state::{FormAction, FormState, StatusKind};
use analyzer_application::{LlmGateway, NoProgress, Reply, SessionController};
use analyzer_domain::{Command, Credential, Document, SessionState};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Full-screen form over one analysis session
pub struct FormApp<G: LlmGateway + 'static> {
    controller: SessionController<G>,
    state: FormState,
}

impl<G: LlmGateway + 'static> FormApp<G> {
    /// `document` pre-fills the document field
    pub fn new(controller: SessionController<G>, document: impl Into<String>) -> Self {
        let active_key = controller.context().credential().map(|c| c.masked());
        let mut state = FormState::new(document, active_key);
        if state.active_key.is_none() {
            state.set_status(StatusKind::Warning, "Enter your key above to enable the app.");
        }
        Self { controller, state }
    }

    /// Run the form until Esc or Ctrl-C
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut events = EventStream::new();
        let model = self.controller.params().model.clone();

        loop {
            terminal.draw(|frame| render(frame, &self.state, &model))?;

            if self.state.should_quit {
                break;
            }

            let Some(event) = events.next().await else {
                break;
            };
            let action = match event? {
                Event::Key(key) => self.state.handle_key(key),
                Event::Paste(text) => {
                    self.state.handle_paste(&text);
                    None
                }
                _ => None,
            };

            let Some(action) = action else {
                continue;
            };

            if matches!(action, FormAction::Summarize | FormAction::Ask) {
                self.state.busy = true;
                self.state.result = None;
                terminal.draw(|frame| render(frame, &self.state, &model))?;
            }
            self.perform(action).await;
            self.state.busy = false;
        }

        Ok(())
    }

    async fn perform(&mut self, action: FormAction) {
        match action {
            FormAction::Quit => {
                let reply = self.controller.dispatch(Command::Exit, &NoProgress).await;
                self.state.apply_reply(reply);
                self.state.should_quit = true;
            }
            FormAction::ApplyKey => self.apply_key(),
            FormAction::Summarize => {
                if self.prepare() {
                    let reply = self.controller.dispatch(Command::Summarize, &NoProgress).await;
                    self.state.apply_reply(reply);
                }
            }
            FormAction::Ask => {
                if self.prepare() {
                    let question = self.state.question.text().to_string();
                    let reply = self
                        .controller
                        .dispatch(Command::Ask(question), &NoProgress)
                        .await;
                    self.state.apply_reply(reply);
                }
            }
        }
    }

    /// Hand a typed key to the session. The field is cleared either way.
    fn apply_key(&mut self) {
        let typed = self.state.api_key.text().to_string();
        self.state.api_key = Default::default();

        match Credential::try_new(typed) {
            Ok(credential) => {
                let masked = credential.masked();
                self.controller.set_credential(credential);
                self.state
                    .set_status(StatusKind::Info, format!("API key set ({}).", masked));
                self.state.active_key = Some(masked);
            }
            Err(e) => self.state.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Apply a pending key and load the document on first use.
    ///
    /// Returns false when the request must not be sent. The document stays
    /// editable until a request can actually go out.
    fn prepare(&mut self) -> bool {
        if !self.state.api_key.is_blank() {
            self.apply_key();
        }

        if self.controller.context().credential().is_none() {
            self.state.apply_reply(Reply::CredentialRequired(
                "Enter your key above to enable the app.".to_string(),
            ));
            return false;
        }

        if self.controller.state() == SessionState::AwaitingDocument {
            let document = match Document::try_new(self.state.document.text()) {
                Ok(doc) => doc,
                Err(e) => {
                    self.state.set_status(StatusKind::Error, e.to_string());
                    return false;
                }
            };
            debug!(chars = document.char_count(), "Form document submitted");
            if let Err(e) = self.controller.load_document(document) {
                self.state.set_status(StatusKind::Error, e.to_string());
                return false;
            }
            self.state.document_locked = true;
        }
        true
    }
}
