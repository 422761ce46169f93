//! The three static backend responders.
//!
//! Each backend is a stateless axum router with exactly two routes: `/health`
//! and its data route, returning a fixed payload with status 200. No input
//! validation is needed — the routes take no parameters.
use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::config::ServiceName;

/// Build the responder router for one backend service.
pub fn router(service: ServiceName) -> Router {
    let data = match service {
        ServiceName::Orders => get(pedidos),
        ServiceName::Payments => get(pagamentos),
        ServiceName::Inventory => get(estoque),
    };

    Router::new()
        .route("/health", get(move || health(service)))
        .route(service.route(), data)
        .layer(TraceLayer::new_for_http())
}

async fn health(service: ServiceName) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": service.as_str() })),
    )
}

async fn pedidos() -> Json<Value> {
    Json(json!([
        { "id": 1, "produto": "Teclado", "status": "criado" },
        { "id": 2, "produto": "Mouse", "status": "pago" },
        { "id": 3, "produto": "Monitor", "status": "em separação" },
    ]))
}

async fn pagamentos() -> Json<Value> {
    Json(json!({
        "gateway": "mock",
        "status": "aprovado",
        "mensagem": "Pagamento processado com sucesso",
    }))
}

async fn estoque() -> Json<Value> {
    Json(json!([
        { "produto": "Teclado", "quantidade": 12 },
        { "produto": "Mouse", "quantidade": 8 },
        { "produto": "Monitor", "quantidade": 5 },
    ]))
}
