//! Unified lookup error handling
//!
//! Single error type for every lexical service client.
//!
//! | Variant | Purpose | Transport failure |
//! |------|------|--------|
//! | Network | Connection refused, reset, DNS failure | Yes |
//! | Timeout | Request exceeded the configured bound | Yes |
//! | ResponseParsing | Body did not match the expected shape | No |
//! | InvalidRequest | URL could not be built from the word | No |
//!
//! The validation pipeline reports any of these as
//! `ErrorKind::NetworkError`; `is_network` separates transit failures from
//! bad answers for logging and retries.

/// Unified lookup error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Network error for {service}: {message}")]
    Network {
        service: &'static str,
        message: String,
    },

    #[error("Timeout for {service}: {message}")]
    Timeout {
        service: &'static str,
        message: String,
    },

    #[error("Failed to parse {service} response: {message}")]
    ResponseParsing {
        service: &'static str,
        message: String,
    },

    #[error("Invalid request for {service}: {message}")]
    InvalidRequest {
        service: &'static str,
        message: String,
    },
}

impl LookupError {
    /// Create network error
    pub fn network(service: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            service,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(service: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            service,
            message: message.into(),
        }
    }

    pub fn response_parsing(service: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            service,
            message: message.into(),
        }
    }

    pub fn invalid_request(service: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            service,
            message: message.into(),
        }
    }

    /// Build from a reqwest failure, keeping timeouts apart from other transport errors
    pub fn from_reqwest(service: &'static str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(service, err.to_string())
        } else if err.is_decode() {
            Self::response_parsing(service, err.to_string())
        } else {
            Self::network(service, err.to_string())
        }
    }

    /// Whether the lookup failed in transit rather than with an answer
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Name of the service that produced the error
    pub fn service(&self) -> &'static str {
        match self {
            Self::Network { service, .. }
            | Self::Timeout { service, .. }
            | Self::ResponseParsing { service, .. }
            | Self::InvalidRequest { service, .. } => service,
        }
    }
}
