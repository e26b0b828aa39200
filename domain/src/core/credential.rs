//! Credential value object
//!
//! The API key is held as an opaque secret. `Debug` and `Display` both
//! render a masked form so the key never ends up in logs or terminal output.

use super::error::DomainError;

/// Number of trailing characters left visible in the masked form
const VISIBLE_SUFFIX: usize = 4;

/// Secret string authorizing access to the model service
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Wrap a secret, trimming surrounding whitespace from copy-paste
    pub fn try_new(secret: impl Into<String>) -> Result<Self, DomainError> {
        let secret = secret.into().trim().to_string();
        if secret.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self { secret })
    }

    /// Expose the raw secret. Only transport code should call this.
    pub fn expose(&self) -> &str {
        &self.secret
    }

    /// Masked form: `****` followed by the last few characters
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.secret.chars().collect();
        if chars.len() <= VISIBLE_SUFFIX * 2 {
            return "****".to_string();
        }
        let tail: String = chars[chars.len() - VISIBLE_SUFFIX..].iter().collect();
        format!("****{}", tail)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.masked())
    }
}
