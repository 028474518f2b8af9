//! Network utilities
//!
//! HTTP client pooling and the transport abstraction the lookup clients run on.

pub mod http;
pub mod transport;

pub use http::{HttpClientPoolConfig, create_custom_client, get_client_with_timeout};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

#[cfg(test)]
pub use transport::MockHttpTransport;
