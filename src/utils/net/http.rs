//! Shared HTTP client for the lexical service clients
//!
//! Every lookup goes through one pooled `reqwest::Client` per timeout so
//! concurrent hint searches reuse connections to the same hosts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use word_duel::utils::net::http::get_client_with_timeout;
//!
//! let client = get_client_with_timeout(Duration::from_secs(8));
//! let response = client.get("https://api.datamuse.com/words?sp=a*").send().await?;
//! ```

use dashmap::DashMap;
use reqwest::{Client, ClientBuilder};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client pool
#[derive(Debug, Clone)]
pub struct HttpClientPoolConfig {
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// Idle connection timeout
    pub pool_idle_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientPoolConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 16,
            pool_idle_timeout: Duration::from_secs(90),
            connect_timeout: Duration::from_secs(5),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// User agent sent to the dictionary services
pub const DEFAULT_USER_AGENT: &str = concat!("word-duel/", env!("CARGO_PKG_VERSION"));

/// Timeout-specific client cache
static TIMEOUT_CLIENT_CACHE: OnceLock<DashMap<u64, Arc<Client>>> = OnceLock::new();

/// Get or create a client with a specific timeout
///
/// Clients are cached by timeout (in milliseconds).
pub fn get_client_with_timeout(timeout: Duration) -> Arc<Client> {
    let cache = TIMEOUT_CLIENT_CACHE.get_or_init(DashMap::new);
    let key = timeout.as_millis() as u64;

    cache
        .entry(key)
        .or_insert_with(|| {
            debug!(timeout_ms = key, "Creating cached HTTP client for timeout");
            Arc::new(create_optimized_client(timeout))
        })
        .clone()
}

fn create_optimized_client(timeout: Duration) -> Client {
    create_custom_client(timeout, &HttpClientPoolConfig::default()).unwrap_or_else(|e| {
        warn!(
            "Failed to create optimized HTTP client, falling back to default: {}",
            e
        );
        Client::new()
    })
}

/// Create a one-off HTTP client with a specific timeout and pool settings
pub fn create_custom_client(
    timeout: Duration,
    config: &HttpClientPoolConfig,
) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(config.pool_idle_timeout)
        .timeout(timeout)
        .connect_timeout(config.connect_timeout.min(timeout))
        .tcp_nodelay(true)
        .user_agent(config.user_agent.clone())
        .build()
}
