//! Free Dictionary API
//!
//! Word-by-word lookup used to decide validity and read part-of-speech tags.

pub mod models;

pub use models::{Definition, DictionaryEntry, DictionaryOutcome, Meaning};

use super::LookupError;
use crate::utils::net::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const SERVICE: &str = "dictionary";

/// Dictionary-by-word lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<DictionaryOutcome, LookupError>;
}

/// Client for `api.dictionaryapi.dev`
#[derive(Clone)]
pub struct FreeDictionaryClient {
    transport: Arc<dyn HttpTransport>,
    api_base: String,
}

impl FreeDictionaryClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api_base: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into(),
        }
    }

    /// `{api_base}/{word}` with the word lower-cased and percent-encoded
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| LookupError::invalid_request(SERVICE, e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::invalid_request(SERVICE, "base URL cannot take a path"))?
            .pop_if_empty()
            .push(&word.to_lowercase());

        Ok(url)
    }
}

#[async_trait]
impl DictionaryLookup for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<DictionaryOutcome, LookupError> {
        let url = self.entry_url(word)?;
        let response = self.transport.get(SERVICE, url.as_str()).await?;

        if response.is_not_found() {
            debug!(word, "Dictionary has no entry");
            return Ok(DictionaryOutcome::NotFound);
        }

        if !response.is_ok() {
            debug!(word, status = response.status, "Dictionary returned non-success status");
            return Ok(DictionaryOutcome::Unavailable(response.status));
        }

        let entries: Vec<DictionaryEntry> = response.json(SERVICE)?;
        if entries.is_empty() {
            return Ok(DictionaryOutcome::NotFound);
        }

        Ok(DictionaryOutcome::Found(entries))
    }
}
