//! Youdao suggest
//!
//! Supplies the short gloss shown next to every accepted word.

pub mod models;

pub use models::{SuggestData, SuggestEntry, SuggestResponse};

use super::LookupError;
use crate::utils::net::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const SERVICE: &str = "gloss";

/// Gloss / translation lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GlossLookup: Send + Sync {
    /// First entry's explanation, `None` when the service has no entry
    async fn explain(&self, query: &str) -> Result<Option<String>, LookupError>;
}

/// Client for `dict.youdao.com/suggest`
#[derive(Clone)]
pub struct YoudaoClient {
    transport: Arc<dyn HttpTransport>,
    api_base: String,
}

impl YoudaoClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api_base: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into(),
        }
    }

    pub fn suggest_url(&self, query: &str) -> Result<Url, LookupError> {
        let base = format!("{}/suggest", self.api_base.trim_end_matches('/'));
        Url::parse_with_params(&base, &[("num", "1"), ("doctype", "json"), ("q", query)])
            .map_err(|e| LookupError::invalid_request(SERVICE, e.to_string()))
    }
}

#[async_trait]
impl GlossLookup for YoudaoClient {
    async fn explain(&self, query: &str) -> Result<Option<String>, LookupError> {
        let url = self.suggest_url(query)?;
        let response = self.transport.get(SERVICE, url.as_str()).await?;

        if !response.is_ok() {
            debug!(query, status = response.status, "Gloss service returned non-success status");
            return Ok(None);
        }

        let suggest: SuggestResponse = response.json(SERVICE)?;
        Ok(suggest.first_explain().map(str::to_string))
    }
}
