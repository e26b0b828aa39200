//! Console output formatter for analysis results

use crate::output::formatter::OutputFormatter;
use analyzer_domain::{AnalysisAction, AnalysisOutcome, Model};
use colored::Colorize;

const WIDTH: usize = 60;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn terminal colors on or off for everything this crate prints
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Banner-wrapped result text
    pub fn format(outcome: &AnalysisOutcome, model: &Model) -> String {
        let title = match outcome.action() {
            AnalysisAction::Summarize => "3-SENTENCE SUMMARY",
            AnalysisAction::Answer => "ANSWER",
        };

        let mut output = String::new();
        output.push_str(&Self::header(&format!("{} (via {})", title, model)));
        output.push('\n');

        let body = outcome.display_text();
        if outcome.is_success() {
            output.push_str(&body);
        } else {
            output.push_str(&body.red().to_string());
        }

        output.push_str(&Self::footer());
        output
    }

    /// A local rejection (bad input, unknown command)
    pub fn rejected(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message.yellow())
    }

    /// Feature access blocked until a key is supplied
    pub fn credential_required(message: &str) -> String {
        format!(
            "{} {}\n  Use {} to enter one.",
            "!".yellow().bold(),
            message.yellow(),
            "key".cyan().bold()
        )
    }

    /// One-line notice (document loaded, key updated)
    pub fn info(message: &str) -> String {
        format!("{} {}", "->".cyan(), message)
    }

    fn header(title: &str) -> String {
        let line = "#".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn footer() -> String {
        format!("\n{}\n", "#".repeat(WIDTH).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &AnalysisOutcome, model: &Model) -> String {
        Self::format(outcome, model)
    }
}
