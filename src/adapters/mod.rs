//! Adapters: the I/O-facing implementations behind the crate's ports and
//! around its core. Server surfaces are plain axum routers; the outbound
//! side is a hyper-util client behind the [`crate::ports::http_client`]
//! port.
pub mod backends;
pub mod gateway;
pub mod http_client;

pub use http_client::HttpClientAdapter;
