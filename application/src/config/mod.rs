//! Application-level configuration.
//!
//! - [`AnalysisParams`]: which model to target and how to sample it

pub mod analysis_params;

pub use analysis_params::AnalysisParams;
