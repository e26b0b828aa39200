//! Presentation layer for doc-analyzer
//!
//! This crate contains the CLI definition, output formatters, the progress
//! spinner, the interactive loop and the full-screen form.

pub mod chat;
pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, CliCommand, DocumentArgs, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use form::FormApp;
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter, json::JsonFormatter};
pub use progress::reporter::ProgressReporter;
