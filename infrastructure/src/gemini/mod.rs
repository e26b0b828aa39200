//! Gemini API adapter
//!
//! Implements LlmGateway for the Gemini `generateContent` REST endpoint.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
