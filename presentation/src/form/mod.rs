//! Full-screen form front end
//!
//! API key, document and question fields over one analysis session,
//! rendered with ratatui on a crossterm backend.

mod app;
mod render;
mod state;

pub use app::FormApp;
pub use state::{Field, FormAction, FormState, TextField};
