//! Progress notification port
//!
//! Defines the interface for reporting progress while a request is in flight.

use analyzer_domain::{AnalysisAction, Model};

/// Callback for progress updates during an analysis request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, action: AnalysisAction, model: &Model);

    /// Called once the request finished, successfully or not
    fn on_request_complete(&self, action: AnalysisAction, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _action: AnalysisAction, _model: &Model) {}
    fn on_request_complete(&self, _action: AnalysisAction, _success: bool) {}
}
