//! Datamuse
//!
//! Lexeme metadata: exact-spelling part-of-speech tags for proper-noun
//! detection, and wildcard searches with frequencies for presets and hints.

pub mod models;

pub use models::{Lexeme, LexemeQuery, Metadata};

use super::LookupError;
use crate::utils::net::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const SERVICE: &str = "lexeme";

/// Lexeme metadata service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LexemeLookup: Send + Sync {
    /// Run a spelling query. A non-success status yields no words.
    async fn words(&self, query: &LexemeQuery) -> Result<Vec<Lexeme>, LookupError>;
}

/// The entry spelled exactly like `word`, if the service knows it
pub async fn exact_lexeme(
    lexemes: &dyn LexemeLookup,
    word: &str,
) -> Result<Option<Lexeme>, LookupError> {
    let found = lexemes.words(&LexemeQuery::exact(word)).await?;
    Ok(found.into_iter().find(|l| l.word.eq_ignore_ascii_case(word)))
}

/// Client for `api.datamuse.com/words`
#[derive(Clone)]
pub struct DatamuseClient {
    transport: Arc<dyn HttpTransport>,
    api_base: String,
}

impl DatamuseClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api_base: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into(),
        }
    }

    pub fn words_url(&self, query: &LexemeQuery) -> Result<Url, LookupError> {
        let base = format!("{}/words", self.api_base.trim_end_matches('/'));
        let max = query.max.to_string();
        Url::parse_with_params(
            &base,
            &[
                ("sp", query.spelled_like.as_str()),
                ("md", query.metadata.as_str()),
                ("max", max.as_str()),
            ],
        )
        .map_err(|e| LookupError::invalid_request(SERVICE, e.to_string()))
    }
}

#[async_trait]
impl LexemeLookup for DatamuseClient {
    async fn words(&self, query: &LexemeQuery) -> Result<Vec<Lexeme>, LookupError> {
        let url = self.words_url(query)?;
        let response = self.transport.get(SERVICE, url.as_str()).await?;

        if !response.is_ok() {
            debug!(
                pattern = %query.spelled_like,
                status = response.status,
                "Lexeme service returned non-success status"
            );
            return Ok(Vec::new());
        }

        response.json(SERVICE)
    }
}
