//! Helper functions for creating specific error types

use super::types::DuelError;

/// Helper functions for creating specific errors
impl DuelError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_source_word<S: Into<String>>(message: S) -> Self {
        Self::InvalidSourceWord(message.into())
    }

    pub fn game_over<S: Into<String>>(message: S) -> Self {
        Self::GameOver(message.into())
    }
}
