//! Analysis parameters: per-request settings shared by every use case.

use analyzer_domain::{Model, TEMPERATURE};
use serde::{Deserialize, Serialize};

/// Request parameters for summarize and answer calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Model the session handle is bound to.
    pub model: Model,
    /// Sampling temperature sent with every request.
    pub temperature: f32,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: TEMPERATURE,
        }
    }
}

impl AnalysisParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}
