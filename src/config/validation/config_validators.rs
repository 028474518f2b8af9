//! Configuration section validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

/// Check that a service base URL is absolute http(s)
pub fn validate_base_url(name: &str, value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{} must use http or https, got {}", name, other)),
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating lookup configuration");

        validate_base_url("dictionary_api_base", &self.dictionary_api_base)?;
        validate_base_url("gloss_api_base", &self.gloss_api_base)?;
        validate_base_url("lexeme_api_base", &self.lexeme_api_base)?;

        if self.timeout_secs == 0 {
            return Err("Lookup timeout must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for HintConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating hint configuration");

        if self.min_local_candidates == 0 {
            return Err("min_local_candidates must be at least 1".to_string());
        }

        if self.max_network_candidates == 0 {
            return Err("max_network_candidates must be at least 1".to_string());
        }

        if self.per_letter_limit == 0 || self.per_letter_limit > 1000 {
            return Err("per_letter_limit must be between 1 and 1000".to_string());
        }

        if self.max_word_len < 2 {
            return Err("max_word_len must be at least 2".to_string());
        }

        Ok(())
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_source_len < 2 {
            return Err("min_source_len must be at least 2".to_string());
        }

        if self.default_players < 2 {
            return Err("A game needs at least 2 players".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
