//! Game session types

use crate::core::validation::ErrorKind;
use serde::{Deserialize, Serialize};

/// Zero-based seat index
pub type PlayerId = usize;

/// One accepted word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub player: PlayerId,
    pub gloss: String,
    pub points: u32,
}

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedGuess {
    pub word: String,
    pub player: PlayerId,
    pub points: u32,
    pub gloss: String,
    /// Player to move next
    pub next_player: PlayerId,
}

/// Why a guess was refused. The turn does not pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessRejection {
    #[error("Enter a word first")]
    Empty,

    #[error("\"{0}\" has already been used")]
    AlreadyUsed(String),

    #[error("\"{0}\" is the source word")]
    OwnWord(String),

    #[error("Cannot construct \"{0}\" from the source letters")]
    CannotConstruct(String),

    #[error("\"{word}\" was rejected: {kind}")]
    Invalid { word: String, kind: ErrorKind },

    #[error("The game is over")]
    GameOver,
}

impl GuessRejection {
    /// Validation error kind, when the pipeline refused the word
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            GuessRejection::Invalid { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
