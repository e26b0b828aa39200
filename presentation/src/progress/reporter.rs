//! Spinner shown while waiting for the model

use analyzer_application::ports::progress::ProgressNotifier;
use analyzer_domain::{AnalysisAction, Model};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an indicatif spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn action_label(action: AnalysisAction) -> &'static str {
        match action {
            AnalysisAction::Summarize => "Summarizing",
            AnalysisAction::Answer => "Answering",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, action: AnalysisAction, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::action_label(action));
        pb.set_message(format!("waiting for {}", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_request_complete(&self, action: AnalysisAction, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let mark = if success { "v".green() } else { "x".red() };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.finish_with_message(format!("{} {}", mark, Self::action_label(action)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_request_complete(AnalysisAction::Summarize, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_start_then_complete_clears_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(AnalysisAction::Answer, &Model::Gemini25Flash);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_request_complete(AnalysisAction::Answer, false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
