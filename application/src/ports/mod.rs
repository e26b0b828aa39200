//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod credential_source;
pub mod llm_gateway;
pub mod progress;
