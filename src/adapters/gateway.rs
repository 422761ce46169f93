//! The gateway's HTTP surface.
//!
//! Exactly four inbound paths are bound: `/health` answers with a static
//! payload and never touches the proxy; the three proxied routes are bound
//! at compile time to their [`ServiceName`], so there is no string-keyed
//! dispatch to fail silently. Anything else falls through to axum's default
//! 404 behavior.
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    config::ServiceName,
    core::proxy::{ForwardingProxy, ProxyOutcome},
};

/// Build the gateway router around a shared [`ForwardingProxy`].
pub fn router(proxy: Arc<ForwardingProxy>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pedidos", get(forward_orders))
        .route("/pagamentos", get(forward_payments))
        .route("/estoque", get(forward_inventory))
        .with_state(proxy)
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    tracing::info!(service = "gateway", route = "/health", "health check");
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "gateway" })),
    )
}

async fn forward_orders(State(proxy): State<Arc<ForwardingProxy>>, method: Method) -> Response {
    forward(&proxy, ServiceName::Orders, &method).await
}

async fn forward_payments(State(proxy): State<Arc<ForwardingProxy>>, method: Method) -> Response {
    forward(&proxy, ServiceName::Payments, &method).await
}

async fn forward_inventory(State(proxy): State<Arc<ForwardingProxy>>, method: Method) -> Response {
    forward(&proxy, ServiceName::Inventory, &method).await
}

/// Convert the proxy's outcome into exactly one gateway response.
async fn forward(proxy: &ForwardingProxy, service: ServiceName, method: &Method) -> Response {
    match proxy.forward(service, service.route(), method.as_str()).await {
        ProxyOutcome::Forwarded { status, body } => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(body),
        )
            .into_response(),
        ProxyOutcome::Unavailable { .. } => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": "Service unavailable" })),
        )
            .into_response(),
    }
}
