//! Session domain
//!
//! Commands a user can issue, the states a session moves through, and the
//! outcome of each analysis request.

pub mod command;
pub mod outcome;
pub mod state;
