//! Credential source port
//!
//! A credential source is a single synchronous lookup. Absence is not an
//! error by itself; callers decide whether it is fatal (batch startup) or
//! merely blocks analysis until a key is supplied (interactive front ends).

use analyzer_domain::Credential;
use thiserror::Error;

/// Where an API key can be looked up
pub trait CredentialSource: Send + Sync {
    /// Look the credential up once. No retries.
    fn resolve(&self) -> Option<Credential>;

    /// Human-readable name of the source, used in diagnostics
    fn describe(&self) -> String;
}

/// No credential was available from the named source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No API key available: the {source_name} is not set.")]
pub struct MissingCredentialError {
    pub source_name: String,
}

/// Resolve a credential or report which source was consulted
pub fn require_credential(
    source: &dyn CredentialSource,
) -> Result<Credential, MissingCredentialError> {
    source.resolve().ok_or_else(|| MissingCredentialError {
        source_name: source.describe(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl CredentialSource for Fixed {
        fn resolve(&self) -> Option<Credential> {
            self.0.and_then(|s| Credential::try_new(s).ok())
        }

        fn describe(&self) -> String {
            "GEMINI_API_KEY environment variable".to_string()
        }
    }

    #[test]
    fn test_require_present() {
        let credential = require_credential(&Fixed(Some("AIzaSyExample"))).unwrap();
        assert_eq!(credential.expose(), "AIzaSyExample");
    }

    #[test]
    fn test_require_missing_names_source() {
        let err = require_credential(&Fixed(None)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No API key available: the GEMINI_API_KEY environment variable is not set."
        );
    }
}
