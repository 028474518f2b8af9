//! Error types for word-duel

use crate::core::providers::LookupError;
use thiserror::Error;

/// Result type alias for word-duel
pub type Result<T> = std::result::Result<T, DuelError>;

/// Main error type for word-duel
#[derive(Error, Debug)]
pub enum DuelError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lexical service errors
    #[error("Lookup error: {0}")]
    Lookup(LookupError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Source word refused at game setup
    #[error("Invalid source word: {0}")]
    InvalidSourceWord(String),

    /// Action attempted on a finished game
    #[error("Game over: {0}")]
    GameOver(String),
}
