//! Configuration data structures for malha.
//!
//! These types map directly to YAML (also JSON / TOML) configuration files.
//! They are intentionally serde‑friendly and include defaults so that running
//! with no config file at all still yields the standard demo topology.
use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Serialize};

/// Default port shared by the gateway and every backend in the demo topology.
pub const DEFAULT_PORT: u16 = 5000;

/// Logical identifier for one of the mesh's backend services.
///
/// The set is closed: gateway routes, registry entries and backend responders
/// are bound 1:1 to these variants at compile time, so there is no
/// stringly-typed dispatch anywhere on the request path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ServiceName {
    Orders,
    Payments,
    Inventory,
}

impl ServiceName {
    /// Every service in the mesh, in route-binding order.
    pub const ALL: [ServiceName; 3] = [Self::Orders, Self::Payments, Self::Inventory];

    /// Wire-level identity, as reported in health payloads and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orders => "pedidos",
            Self::Payments => "pagamentos",
            Self::Inventory => "estoque",
        }
    }

    /// Inbound gateway path for this service. The backend's data route uses
    /// the same path, so the gateway forwards without rewriting.
    pub fn route(self) -> &'static str {
        match self {
            Self::Orders => "/pedidos",
            Self::Payments => "/pagamentos",
            Self::Inventory => "/estoque",
        }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_listen_addr() -> String {
    format!("0.0.0.0:{DEFAULT_PORT}")
}

fn default_forward_timeout_secs() -> u64 {
    3
}

fn default_upstreams() -> HashMap<ServiceName, String> {
    ServiceName::ALL
        .into_iter()
        .map(|service| {
            (
                service,
                format!(
                    "http://{}:{DEFAULT_PORT}{}",
                    service.as_str(),
                    service.route()
                ),
            )
        })
        .collect()
}

/// Top-level mesh configuration.
///
/// `upstreams` maps each logical service name to its full upstream URL. The
/// defaults use DNS-style container hostnames (`http://pedidos:5000/pedidos`
/// and so on); overriding individual entries via config file or environment
/// preserves the name → address contract while changing the addressing.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MeshConfig {
    /// Address the gateway binds to.
    pub listen_addr: String,
    /// Upstream URL per logical service.
    pub upstreams: HashMap<ServiceName, String>,
    /// Hard bound on each outbound call, in whole seconds.
    pub forward_timeout_secs: u64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            upstreams: default_upstreams(),
            forward_timeout_secs: default_forward_timeout_secs(),
        }
    }
}

impl MeshConfig {
    /// The outbound-call bound as a [`Duration`].
    pub fn forward_timeout(&self) -> Duration {
        Duration::from_secs(self.forward_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_routes() {
        assert_eq!(ServiceName::Orders.as_str(), "pedidos");
        assert_eq!(ServiceName::Payments.as_str(), "pagamentos");
        assert_eq!(ServiceName::Inventory.as_str(), "estoque");
        for service in ServiceName::ALL {
            assert_eq!(service.route(), format!("/{}", service.as_str()));
        }
    }

    #[test]
    fn default_config_targets_container_hostnames() {
        let config = MeshConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.forward_timeout(), Duration::from_secs(3));
        assert_eq!(
            config.upstreams.get(&ServiceName::Orders).unwrap(),
            "http://pedidos:5000/pedidos"
        );
        assert_eq!(
            config.upstreams.get(&ServiceName::Payments).unwrap(),
            "http://pagamentos:5000/pagamentos"
        );
        assert_eq!(
            config.upstreams.get(&ServiceName::Inventory).unwrap(),
            "http://estoque:5000/estoque"
        );
    }

    #[test]
    fn service_name_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ServiceName::Inventory).unwrap(),
            "\"inventory\""
        );
        let parsed: ServiceName = serde_json::from_str("\"orders\"").unwrap();
        assert_eq!(parsed, ServiceName::Orders);
    }
}
