//! Lexical service configuration

use super::*;
use crate::utils::net::http::DEFAULT_USER_AGENT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoints and limits for the dictionary, gloss and lexeme services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Free Dictionary API base (the word is appended as a path segment)
    #[serde(default = "default_dictionary_api_base")]
    pub dictionary_api_base: String,
    /// Youdao base serving `/suggest`
    #[serde(default = "default_gloss_api_base")]
    pub gloss_api_base: String,
    /// Datamuse base serving `/words`
    #[serde(default = "default_lexeme_api_base")]
    pub lexeme_api_base: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            dictionary_api_base: default_dictionary_api_base(),
            gloss_api_base: default_gloss_api_base(),
            lexeme_api_base: default_lexeme_api_base(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    /// Point every service at one base URL, e.g. a local mock server
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            dictionary_api_base: format!("{}/api/v2/entries/en", base),
            gloss_api_base: base.to_string(),
            lexeme_api_base: base.to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
