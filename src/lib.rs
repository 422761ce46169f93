//! Malha - a minimal service mesh demo.
//!
//! Malha is a small mesh of four services: a gateway and three static
//! backends (orders → `/pedidos`, payments → `/pagamentos`, inventory →
//! `/estoque`). The gateway forwards each inbound request to the right
//! backend by logical name, bounds the outbound call with a hard timeout,
//! measures latency, and emits one structured log event per request phase.
//!
//! # Architecture
//! The crate separates **ports** (traits) from **adapters**
//! (implementations) while keeping the request-lifecycle logic inside
//! `core`. The interesting part is [`ForwardingProxy`]: everything else is
//! a thin I/O wrapper around it.
//!
//! # Quick Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use malha::{
//!     ForwardingProxy, HttpClient, ServiceRegistry, adapters,
//!     adapters::HttpClientAdapter, config::MeshConfig,
//! };
//!
//! # #[tokio::main] async fn main() -> eyre::Result<()> {
//! let config = MeshConfig::default();
//! let client: Arc<dyn HttpClient> = Arc::new(HttpClientAdapter::new());
//! let proxy = Arc::new(ForwardingProxy::new(
//!     ServiceRegistry::from_config(&config),
//!     client,
//!     config.forward_timeout(),
//! ));
//! let app = adapters::gateway::router(proxy);
//! // hand `app` to axum::serve (see the binary crate)
//! # Ok(()) }
//! ```
//!
//! # Error Handling
//! Transport-level faults never cross the gateway boundary: the proxy
//! converts them into a uniform 502 contract. An error status actually
//! received from a backend is not a fault and passes through unmodified.
pub mod adapters;
pub mod config;
pub mod core;
pub mod ports;
pub mod tracing_setup;

pub use crate::{
    adapters::HttpClientAdapter,
    config::{MeshConfig, ServiceName},
    core::{ForwardingProxy, ProxyOutcome, ServiceRegistry},
    ports::http_client::HttpClient,
};
