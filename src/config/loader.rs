//! Configuration loading utilities
//!
//! Environment overrides use the `WORD_DUEL_` prefix, e.g.
//! `WORD_DUEL_LOOKUP_TIMEOUT_SECS=5` or `WORD_DUEL_HINT_SEED=7`.

use super::Config;
use crate::utils::error::{DuelError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

const PREFIX: &str = "WORD_DUEL_";

/// Overlay `WORD_DUEL_*` variables (and a `.env` file, if present) onto `config`
pub fn apply_env(config: Config) -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment file {:?}", path);
    }
    apply_vars(config, |key| env::var(key).ok())
}

/// Overlay variables resolved by `lookup` onto `config`
pub fn apply_vars<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{}{}", PREFIX, name));

    // Lookup configuration
    if let Some(value) = var("DICTIONARY_API_BASE") {
        config.lookup.dictionary_api_base = value;
    }
    if let Some(value) = var("GLOSS_API_BASE") {
        config.lookup.gloss_api_base = value;
    }
    if let Some(value) = var("LEXEME_API_BASE") {
        config.lookup.lexeme_api_base = value;
    }
    if let Some(value) = var("LOOKUP_TIMEOUT_SECS") {
        config.lookup.timeout_secs = parse("LOOKUP_TIMEOUT_SECS", &value)?;
    }

    // Hint configuration
    if let Some(value) = var("HINT_MIN_LOCAL") {
        config.hint.min_local_candidates = parse("HINT_MIN_LOCAL", &value)?;
    }
    if let Some(value) = var("HINT_MAX_NETWORK") {
        config.hint.max_network_candidates = parse("HINT_MAX_NETWORK", &value)?;
    }
    if let Some(value) = var("HINT_PER_LETTER_LIMIT") {
        config.hint.per_letter_limit = parse("HINT_PER_LETTER_LIMIT", &value)?;
    }
    if let Some(value) = var("HINT_SEED") {
        config.hint.seed = Some(parse("HINT_SEED", &value)?);
    }

    // Game configuration
    if let Some(value) = var("MIN_SOURCE_LEN") {
        config.game.min_source_len = parse("MIN_SOURCE_LEN", &value)?;
    }
    if let Some(value) = var("PLAYERS") {
        config.game.default_players = parse("PLAYERS", &value)?;
    }

    // Logging configuration
    if let Some(value) = var("LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Some(value) = var("LOG_JSON") {
        config.logging.json = parse("LOG_JSON", &value)?;
    }

    Ok(config)
}

fn parse<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DuelError::Config(format!("Invalid {}{}: {}", PREFIX, name, e)))
}
