//! Logging utilities
//!
//! Installs the `tracing` subscriber used by the binary and by tests that
//! want log output.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
