//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models the analyzer can target
//! - [`question::Question`]: a validated question about the document
//! - [`credential::Credential`]: the API key, masked whenever it is printed
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod question;
pub mod string;
