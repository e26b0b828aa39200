//! Credential sources
//!
//! Adapters for the `CredentialSource` port: process environment, a fixed
//! value (typed in by the user or read from config), and an ordered chain
//! of both.

use analyzer_application::ports::credential_source::CredentialSource;
use analyzer_domain::Credential;
use tracing::debug;

/// Environment variable consulted when no other name is configured
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Reads the key from a named environment variable
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// `GEMINI_API_KEY`
    pub fn gemini() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialSource for EnvCredentialSource {
    fn resolve(&self) -> Option<Credential> {
        // Set-but-blank counts as absent
        let value = std::env::var(&self.var).ok()?;
        Credential::try_new(value).ok()
    }

    fn describe(&self) -> String {
        format!("{} environment variable", self.var)
    }
}

/// A credential known up front, or known to be missing
#[derive(Debug, Clone)]
pub struct StaticCredentialSource {
    credential: Option<Credential>,
    label: String,
}

impl StaticCredentialSource {
    pub fn new(credential: Option<Credential>, label: impl Into<String>) -> Self {
        Self {
            credential,
            label: label.into(),
        }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn resolve(&self) -> Option<Credential> {
        self.credential.clone()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Tries each source in order; the first one that yields a key wins
#[derive(Default)]
pub struct ChainedCredentialSource {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainedCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl CredentialSource for ChainedCredentialSource {
    fn resolve(&self) -> Option<Credential> {
        self.sources.iter().find_map(|source| {
            let found = source.resolve();
            if let Some(credential) = &found {
                debug!(source = %source.describe(), key = %credential, "Credential resolved");
            }
            found
        })
    }

    fn describe(&self) -> String {
        self.sources
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
