//! REPL (Read-Eval-Print Loop) over one analysis session

use super::document::{DocumentInput, read_document};
use super::secret::read_secret;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::{OutputFormatter, for_format};
use crate::progress::reporter::ProgressReporter;
use analyzer_application::{
    LlmGateway, NoProgress, ProgressNotifier, Reply, SessionController,
};
use analyzer_domain::{Command, Credential, Document, Model};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// What a line typed at the main prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Empty,
    Help,
    /// `key` on its own: prompt for the key without echo
    EnterKey,
    /// `key <value>`: refused, the value would land in history
    InlineKey,
    /// `ask` with no question: prompt for it
    AskPrompt,
    /// Anything else goes to the session controller
    Session(String),
}

impl LineAction {
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        match words.next() {
            None => LineAction::Empty,
            Some("help" | "h" | "?") => LineAction::Help,
            Some("key") if words.next().is_some() => LineAction::InlineKey,
            Some("key") => LineAction::EnterKey,
            _ => match Command::parse(line) {
                Some(Command::Ask(q)) if q.trim().is_empty() => LineAction::AskPrompt,
                _ => LineAction::Session(line.to_string()),
            },
        }
    }
}

/// Interactive REPL
pub struct ChatRepl<G: LlmGateway + 'static> {
    controller: SessionController<G>,
    output: OutputConfig,
    repl: ReplConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<G: LlmGateway + 'static> ChatRepl<G> {
    pub fn new(controller: SessionController<G>, output: OutputConfig, repl: ReplConfig) -> Self {
        let formatter = for_format(output.format);
        Self {
            controller,
            output,
            repl,
            formatter,
        }
    }

    fn model(&self) -> &Model {
        &self.controller.params().model
    }

    fn line_editor(&self) -> Reedline {
        let Some(path) = &self.repl.history_file else {
            return Reedline::create();
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => Reedline::create().with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled: {}", e);
                Reedline::create()
            }
        }
    }

    /// Run the interactive REPL
    ///
    /// `document` is text given on the command line; when `None` the user
    /// is asked to paste one.
    pub async fn run(&mut self, document: Option<String>) -> io::Result<()> {
        self.print_welcome();

        let text = match document {
            Some(text) => Some(text),
            None => match read_document()? {
                DocumentInput::Text(text) => Some(text),
                DocumentInput::Empty => None,
                DocumentInput::Aborted => {
                    println!("Bye!");
                    return Ok(());
                }
            },
        };
        let (document, is_sample) = Document::or_sample(text.as_deref());
        if is_sample {
            println!("{}", ConsoleFormatter::info("Using the built-in sample resume."));
        }
        println!(
            "{}",
            ConsoleFormatter::info(&format!("Document loaded ({} characters).", document.char_count()))
        );
        if let Err(e) = self.controller.load_document(document) {
            println!("{}", ConsoleFormatter::rejected(&e.to_string()));
            return Ok(());
        }

        if self.controller.context().credential().is_none() {
            println!(
                "{}",
                ConsoleFormatter::credential_required(
                    "Please set a valid Gemini API key to proceed with analysis."
                )
            );
        }
        println!();
        print_help();

        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("doc-analyzer".to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            let line = match editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => "exit".to_string(),
            };

            let reply = match LineAction::classify(&line) {
                LineAction::Empty => continue,
                LineAction::Help => {
                    print_help();
                    continue;
                }
                LineAction::InlineKey => {
                    println!(
                        "{}",
                        ConsoleFormatter::rejected(
                            "Type `key` on its own; the key is then read without echo."
                        )
                    );
                    continue;
                }
                LineAction::EnterKey => {
                    self.enter_key()?;
                    continue;
                }
                LineAction::AskPrompt => {
                    let question = match editor.read_line(&question_prompt())? {
                        Signal::Success(q) => q,
                        _ => continue,
                    };
                    self.dispatch(Command::Ask(question)).await
                }
                LineAction::Session(line) => {
                    let progress = self.progress();
                    self.controller.handle_input(&line, progress.as_ref()).await
                }
            };

            if self.show_reply(&reply) {
                break;
            }
        }

        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> Reply {
        let progress = self.progress();
        self.controller.dispatch(command, progress.as_ref()).await
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.output.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }

    fn enter_key(&mut self) -> io::Result<()> {
        let Some(secret) = read_secret("Gemini API key: ")? else {
            println!("{}", ConsoleFormatter::info("Key entry cancelled."));
            return Ok(());
        };
        match Credential::try_new(secret) {
            Ok(credential) => {
                let masked = credential.masked();
                self.controller.set_credential(credential);
                println!(
                    "{}",
                    ConsoleFormatter::info(&format!("API key set ({}).", masked))
                );
            }
            Err(e) => println!("{}", ConsoleFormatter::rejected(&e.to_string())),
        }
        Ok(())
    }

    /// Print a reply. Returns true if the loop should end.
    fn show_reply(&self, reply: &Reply) -> bool {
        match reply {
            Reply::Outcome(outcome) => {
                println!();
                println!("{}", self.formatter.format(outcome, self.model()));
                if outcome.failure_kind().is_some_and(|k| k.needs_new_credential()) {
                    println!(
                        "{}",
                        ConsoleFormatter::info("Check the key and enter a new one with `key`.")
                    );
                }
                false
            }
            Reply::CredentialRequired(message) => {
                println!("{}", ConsoleFormatter::credential_required(message));
                false
            }
            Reply::Rejected(message) => {
                println!("{}", ConsoleFormatter::rejected(message));
                false
            }
            Reply::Exited => {
                println!("Bye!");
                true
            }
        }
    }

    fn print_welcome(&self) {
        let key = self
            .controller
            .context()
            .credential()
            .map(|c| c.masked())
            .unwrap_or_else(|| "not set".to_string());

        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Gemini Document Analyzer - Chat       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model:   {}", self.model());
        println!("API key: {}", key);
        println!();
    }
}

fn question_prompt() -> DefaultPrompt {
    DefaultPrompt::new(
        DefaultPromptSegment::Basic("question".to_string()),
        DefaultPromptSegment::Empty,
    )
}

fn print_help() {
    println!("Commands:");
    println!("  1, summarize        - 3-sentence summary of the document");
    println!("  2, ask [question]   - Answer a question from the document");
    println!("  3, exit, quit       - Exit");
    println!("  key                 - Enter a new API key");
    println!("  help                - Show this help");
    println!();
}
