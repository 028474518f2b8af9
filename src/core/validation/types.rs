//! Validation result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a word was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    None,
    /// Names a person or place
    ProperNoun,
    /// Not a general word, or blocked by the safety and abbreviation policy
    Invalid,
    /// The lookup could not be completed
    NetworkError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorKind::None => "valid word",
            ErrorKind::ProperNoun => "proper nouns are not allowed",
            ErrorKind::Invalid => "not a valid English word",
            ErrorKind::NetworkError => "could not reach the dictionary, please try again",
        };
        f.write_str(message)
    }
}

/// Outcome of a word check. `ErrorKind::None` exactly when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    gloss: String,
    error_kind: ErrorKind,
}

impl ValidationResult {
    pub fn valid(gloss: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            gloss: gloss.into(),
            error_kind: ErrorKind::None,
        }
    }

    /// A refusal of the given kind; `ErrorKind::None` is treated as `Invalid`
    pub fn rejected(kind: ErrorKind, gloss: impl Into<String>) -> Self {
        let error_kind = match kind {
            ErrorKind::None => ErrorKind::Invalid,
            other => other,
        };
        Self {
            is_valid: false,
            gloss: gloss.into(),
            error_kind,
        }
    }

    pub fn invalid() -> Self {
        Self::rejected(ErrorKind::Invalid, "")
    }

    pub fn proper_noun() -> Self {
        Self::rejected(ErrorKind::ProperNoun, "")
    }

    pub fn network_error() -> Self {
        Self::rejected(ErrorKind::NetworkError, "")
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }
}
