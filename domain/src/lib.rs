//! Domain layer for doc-analyzer
//!
//! This crate contains the core concepts, value objects and prompt templates.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Document**: the text under analysis, supplied once per session
//! - **Question**: a non-empty query posed against the document
//! - **Credential**: the secret that authorizes access to the model service
//! - **Prompt**: instruction template plus document payload, built fresh per call
//! - **AnalysisOutcome**: model text, or a classified failure substituted for it

pub mod config;
pub mod core;
pub mod document;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    credential::Credential, error::DomainError, model::Model, question::Question,
    string::{normalize_newlines, truncate},
};
pub use document::{Document, sample::SAMPLE_RESUME};
pub use prompt::{FALLBACK_ANSWER, PromptTemplate};
pub use session::{
    command::Command,
    outcome::{AnalysisAction, AnalysisOutcome, ERROR_MARKER, FailureKind},
    state::SessionState,
};

/// Sampling temperature used for every request.
///
/// Low enough that summaries and answers stay factual and repeatable.
pub const TEMPERATURE: f32 = 0.1;
