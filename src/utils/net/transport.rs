//! Abstract HTTP transport
//!
//! The lookup clients only need `fetch(url) -> {ok, status, json()}`. Any
//! transport that can answer a GET with a status and a body can back them:
//! the reqwest transport below, a platform bridge, or a test double.

use super::http::{
    DEFAULT_USER_AGENT, HttpClientPoolConfig, create_custom_client, get_client_with_timeout,
};
use crate::config::LookupConfig;
use crate::core::providers::LookupError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Status and body of a completed GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self, service: &'static str) -> Result<T, LookupError> {
        serde_json::from_str(&self.body)
            .map_err(|e| LookupError::response_parsing(service, e.to_string()))
    }
}

/// GET capability used by every lexical service client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET. Only transport failures are errors; any status is a response.
    async fn get(&self, service: &'static str, url: &str)
    -> Result<TransportResponse, LookupError>;
}

/// Transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Arc<Client>,
}

impl ReqwestTransport {
    /// Transport sharing the process-wide client for this timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: get_client_with_timeout(timeout),
        }
    }

    /// Transport honouring the configured timeout and user agent
    pub fn from_config(config: &LookupConfig) -> Self {
        if config.user_agent == DEFAULT_USER_AGENT {
            return Self::with_timeout(config.timeout());
        }

        let pool = HttpClientPoolConfig {
            user_agent: config.user_agent.clone(),
            ..HttpClientPoolConfig::default()
        };
        match create_custom_client(config.timeout(), &pool) {
            Ok(client) => Self::from_client(client),
            Err(e) => {
                warn!("Failed to build HTTP client with custom user agent: {}", e);
                Self::with_timeout(config.timeout())
            }
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        service: &'static str,
        url: &str,
    ) -> Result<TransportResponse, LookupError> {
        debug!(service, url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(service, &e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(service, &e))?;

        Ok(TransportResponse { status, body })
    }
}
