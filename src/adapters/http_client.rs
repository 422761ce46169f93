use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{Request, Version, header};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tokio::time::timeout;

use crate::ports::http_client::{HttpClient, HttpClientError, HttpClientResult, UpstreamResponse};

/// HTTP client adapter using the hyper-util legacy client over plain TCP.
///
/// The mesh speaks HTTP/1.1 to its own backends, so there is no TLS layer
/// here. Responses are collected fully before being handed back so the proxy
/// can pass the body through in a single piece.
///
/// This adapter is intentionally minimal; retries / circuit breaking would be
/// layered on a different abstraction if ever required.
pub struct HttpClientAdapter {
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl HttpClientAdapter {
    /// Create a new HTTP client adapter.
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client }
    }
}

impl Default for HttpClientAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for HttpClientAdapter {
    async fn get(&self, url: &str, bound: Duration) -> HttpClientResult<UpstreamResponse> {
        let request = Request::builder()
            .method("GET")
            .uri(url)
            .version(Version::HTTP_11)
            .header(header::USER_AGENT, "malha-gateway/0.1")
            .body(Empty::<Bytes>::new())
            .map_err(|e| HttpClientError::InvalidRequest(e.to_string()))?;

        tracing::debug!("Sending upstream request: GET {url}");

        // One bound for the whole round trip: headers and body together.
        let round_trip = async {
            let response = self
                .client
                .request(request)
                .await
                .map_err(|e| HttpClientError::Connection(e.to_string()))?;

            let (parts, body) = response.into_parts();
            let collected = body
                .collect()
                .await
                .map_err(|e| HttpClientError::Connection(e.to_string()))?;

            Ok(UpstreamResponse {
                status: parts.status,
                body: collected.to_bytes(),
            })
        };

        match timeout(bound, round_trip).await {
            Ok(result) => result,
            Err(_) => Err(HttpClientError::Timeout(bound)),
        }
    }
}
