//! Form state and key handling
//!
//! Everything here is pure so key bindings and reply handling can be tested
//! without a terminal. The app loop turns [`FormAction`]s into controller
//! calls and feeds the replies back through [`FormState::apply_reply`].

use analyzer_application::Reply;
use analyzer_domain::{AnalysisOutcome, normalize_newlines};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    ApiKey,
    Document,
    Question,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::ApiKey => Field::Document,
            Field::Document => Field::Question,
            Field::Question => Field::ApiKey,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::ApiKey => Field::Question,
            Field::Document => Field::ApiKey,
            Field::Question => Field::Document,
        }
    }
}

/// Editable text with a cursor measured in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Line and column of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.text.chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
        (line, col)
    }
}

/// Something the app loop has to do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Summarize,
    Ask,
    /// The key field was confirmed or left
    ApplyKey,
    Quit,
}

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Full form state
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: Field,
    pub api_key: TextField,
    pub document: TextField,
    pub question: TextField,
    /// The document was handed to the session and can no longer change
    pub document_locked: bool,
    pub result: Option<AnalysisOutcome>,
    pub status: Option<(StatusKind, String)>,
    /// Masked form of the key currently in use, if any
    pub active_key: Option<String>,
    pub busy: bool,
    pub should_quit: bool,
}

impl FormState {
    pub fn new(document: impl Into<String>, active_key: Option<String>) -> Self {
        Self {
            focus: if active_key.is_some() {
                Field::Document
            } else {
                Field::ApiKey
            },
            api_key: TextField::default(),
            document: TextField::with_text(document),
            question: TextField::default(),
            document_locked: false,
            result: None,
            status: None,
            active_key,
            busy: false,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some((kind, message.into()));
    }

    fn focused_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Field::ApiKey => Some(&mut self.api_key),
            Field::Document if self.document_locked => None,
            Field::Document => Some(&mut self.document),
            Field::Question => Some(&mut self.question),
        }
    }

    /// Move focus, applying the key when leaving a non-empty key field
    fn move_focus(&mut self, to: Field) -> Option<FormAction> {
        let leaving_key = self.focus == Field::ApiKey && !self.api_key.is_blank();
        self.focus = to;
        leaving_key.then_some(FormAction::ApplyKey)
    }

    /// Apply a key press to the state
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(FormAction::Quit),
            KeyCode::Char('c') if ctrl => return Some(FormAction::Quit),
            KeyCode::F(2) => return Some(FormAction::Summarize),
            KeyCode::F(3) => return Some(FormAction::Ask),
            KeyCode::Tab => return self.move_focus(self.focus.next()),
            KeyCode::BackTab => return self.move_focus(self.focus.prev()),
            KeyCode::Enter => match self.focus {
                Field::ApiKey => return self.move_focus(Field::Document),
                Field::Question => return Some(FormAction::Ask),
                Field::Document => {}
            },
            _ => {}
        }

        if self.focus == Field::Document && self.document_locked {
            self.set_status(
                StatusKind::Info,
                "The document is fixed for this session.",
            );
            return None;
        }

        let focus = self.focus;
        let field = self.focused_mut()?;
        match key.code {
            KeyCode::Enter if focus == Field::Document => field.insert('\n'),
            KeyCode::Char(c) if !ctrl => field.insert(c),
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.left(),
            KeyCode::Right => field.right(),
            KeyCode::Home => field.home(),
            KeyCode::End => field.end(),
            _ => {}
        }
        None
    }

    /// Reflect a controller reply in the form
    pub fn apply_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Outcome(outcome) => {
                if outcome.is_success() {
                    self.status = None;
                } else if outcome.failure_kind().is_some_and(|k| k.needs_new_credential()) {
                    self.set_status(
                        StatusKind::Warning,
                        "API key invalid or failed to initialize. Please check and re-enter.",
                    );
                    self.focus = Field::ApiKey;
                } else {
                    self.set_status(StatusKind::Error, "The request failed.");
                }
                self.result = Some(outcome);
            }
            Reply::CredentialRequired(message) => {
                self.set_status(StatusKind::Warning, message);
                self.focus = Field::ApiKey;
            }
            Reply::Rejected(message) => self.set_status(StatusKind::Error, message),
            Reply::Exited => self.should_quit = true,
        }
    }

    /// Insert pasted text into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        let text = normalize_newlines(text);
        let single_line = self.focus != Field::Document;
        if let Some(field) = self.focused_mut() {
            if single_line {
                field.insert_str(text.lines().next().unwrap_or(""));
            } else {
                field.insert_str(&text);
            }
        }
    }
}
