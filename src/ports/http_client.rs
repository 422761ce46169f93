use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use hyper::StatusCode;
use thiserror::Error;

/// Custom error type for upstream HTTP calls.
///
/// Every variant here is a transport-level fault: the upstream never produced
/// a well-formed HTTP response. An error *status* from the upstream is not an
/// error at this layer — it comes back as a normal [`UpstreamResponse`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HttpClientError {
    /// Connection refused, reset, DNS failure or any other network fault
    #[error("connection error: {0}")]
    Connection(String),

    /// The bounded wait expired before a full response arrived
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The outbound request could not be constructed
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type alias for HTTP client operations
pub type HttpClientResult<T> = Result<T, HttpClientError>;

/// A fully received upstream response: status plus collected body bytes.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HttpClient defines the port (interface) for calling backend services.
#[async_trait]
pub trait HttpClient: Send + Sync + 'static {
    /// Perform a GET against `url`, bounded by `timeout`.
    ///
    /// The bound covers the whole round trip — connect, response headers and
    /// body — so a stalled upstream cannot hold a request open indefinitely.
    async fn get(&self, url: &str, timeout: Duration) -> HttpClientResult<UpstreamResponse>;
}
