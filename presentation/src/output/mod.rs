//! Output formatting for analysis results

pub mod console;
pub mod formatter;
pub mod json;
