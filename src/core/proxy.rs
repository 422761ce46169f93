//! The forwarding proxy — the gateway's whole request lifecycle lives here.
//!
//! One call to [`ForwardingProxy::forward`] handles one inbound request:
//! resolve the logical service through the registry, perform a single
//! bounded outbound GET through the [`HttpClient`] port, measure elapsed
//! time, and emit one structured log event per phase. The outcome is a
//! closed variant that directly drives the gateway response.
//!
//! The distinction this layer must never collapse: an HTTP error status
//! actually received from the upstream passes through as-is; only a
//! transport-level fault (refusal, DNS failure, timeout expiry) becomes the
//! uniform 502 contract.
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use bytes::Bytes;
use hyper::StatusCode;

use crate::{
    config::ServiceName,
    core::registry::ServiceRegistry,
    ports::http_client::HttpClient,
};

/// Terminal result of handling one proxied request. Computed exactly once
/// per request.
#[derive(Debug, Clone)]
pub enum ProxyOutcome {
    /// The upstream produced a response; status and body pass through
    /// unmodified, including non-2xx statuses.
    Forwarded { status: StatusCode, body: Bytes },
    /// The upstream could not be reached before the forward bound expired.
    Unavailable { detail: String },
}

/// Resolves logical service names, performs the bounded outbound call and
/// emits structured log events at each phase of the request.
///
/// Holds no mutable state; a single instance is shared across all in-flight
/// requests.
pub struct ForwardingProxy {
    registry: ServiceRegistry,
    client: Arc<dyn HttpClient>,
    forward_timeout: Duration,
}

impl ForwardingProxy {
    pub fn new(
        registry: ServiceRegistry,
        client: Arc<dyn HttpClient>,
        forward_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            client,
            forward_timeout,
        }
    }

    /// Forward one inbound request to the backend behind `service`.
    ///
    /// Emits exactly one "request received" event and exactly one terminal
    /// event ("request forwarded" on any received response, "service
    /// unavailable" on a transport fault), and returns exactly one outcome.
    pub async fn forward(&self, service: ServiceName, route: &str, method: &str) -> ProxyOutcome {
        let start = Instant::now();

        tracing::info!(
            service = "gateway",
            route,
            method,
            target_service = %service,
            "request received"
        );

        let url = match self.registry.resolve(service) {
            Ok(url) => url,
            Err(e) => return self.unavailable(service, route, start, e.to_string()),
        };

        match self.client.get(url, self.forward_timeout).await {
            Ok(upstream) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                tracing::info!(
                    service = "gateway",
                    route,
                    target_service = %service,
                    status_code = upstream.status.as_u16(),
                    duration_ms,
                    "request forwarded"
                );
                ProxyOutcome::Forwarded {
                    status: upstream.status,
                    body: upstream.body,
                }
            }
            Err(e) => self.unavailable(service, route, start, e.to_string()),
        }
    }

    fn unavailable(
        &self,
        service: ServiceName,
        route: &str,
        start: Instant,
        detail: String,
    ) -> ProxyOutcome {
        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::error!(
            service = "gateway",
            route,
            target_service = %service,
            error = %detail,
            duration_ms,
            "service unavailable"
        );
        ProxyOutcome::Unavailable { detail }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::ports::http_client::{HttpClientError, HttpClientResult, UpstreamResponse};

    struct StaticClient {
        status: StatusCode,
        body: &'static str,
    }

    #[async_trait]
    impl HttpClient for StaticClient {
        async fn get(&self, _url: &str, _timeout: Duration) -> HttpClientResult<UpstreamResponse> {
            Ok(UpstreamResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    struct RefusingClient;

    #[async_trait]
    impl HttpClient for RefusingClient {
        async fn get(&self, _url: &str, _timeout: Duration) -> HttpClientResult<UpstreamResponse> {
            Err(HttpClientError::Connection("connection refused".to_string()))
        }
    }

    fn proxy_with(client: Arc<dyn HttpClient>) -> ForwardingProxy {
        let registry = ServiceRegistry::from_config(&crate::config::MeshConfig::default());
        ForwardingProxy::new(registry, client, Duration::from_secs(3))
    }

    #[tokio::test]
    async fn forwards_status_and_body_verbatim() {
        let proxy = proxy_with(Arc::new(StaticClient {
            status: StatusCode::OK,
            body: r#"[{"produto":"Teclado","quantidade":12}]"#,
        }));

        match proxy.forward(ServiceName::Inventory, "/estoque", "GET").await {
            ProxyOutcome::Forwarded { status, body } => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body, r#"[{"produto":"Teclado","quantidade":12}]"#);
            }
            other => panic!("Expected Forwarded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_error_status_is_not_translated() {
        let proxy = proxy_with(Arc::new(StaticClient {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"error":"boom"}"#,
        }));

        match proxy.forward(ServiceName::Orders, "/pedidos", "GET").await {
            ProxyOutcome::Forwarded { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, r#"{"error":"boom"}"#);
            }
            other => panic!("Expected pass-through, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_fault_becomes_unavailable() {
        let proxy = proxy_with(Arc::new(RefusingClient));

        match proxy
            .forward(ServiceName::Payments, "/pagamentos", "GET")
            .await
        {
            ProxyOutcome::Unavailable { detail } => {
                assert!(detail.contains("connection refused"));
            }
            other => panic!("Expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_service_fails_fast_as_unavailable() {
        let registry = ServiceRegistry::new(HashMap::new());
        let proxy = ForwardingProxy::new(
            registry,
            Arc::new(StaticClient {
                status: StatusCode::OK,
                body: "{}",
            }),
            Duration::from_secs(3),
        );

        match proxy.forward(ServiceName::Orders, "/pedidos", "GET").await {
            ProxyOutcome::Unavailable { detail } => {
                assert!(detail.contains("pedidos"));
            }
            other => panic!("Expected Unavailable, got {other:?}"),
        }
    }
}
