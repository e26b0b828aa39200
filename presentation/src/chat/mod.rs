//! Interactive chat module
//!
//! Provides a line-editor based loop over one analysis session.

mod document;
mod repl;
mod secret;

pub use repl::{ChatRepl, LineAction};
