//! Static service registry: logical service name → upstream base URL.
//!
//! The registry is built once from [`MeshConfig`] at process start and never
//! mutated, so shared references are safe under concurrent request handling
//! without any synchronization. This layer does no I/O.
use std::collections::HashMap;

use thiserror::Error;

use crate::config::{MeshConfig, ServiceName};

/// Error type for registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested logical service has no registered upstream. The bound
    /// gateway routes cannot produce this, but the contract is defined so a
    /// partial registry fails fast instead of responding partially.
    #[error("no upstream registered for service '{0}'")]
    UnknownService(ServiceName),
}

/// Read-only mapping from [`ServiceName`] to its upstream URL.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    upstreams: HashMap<ServiceName, String>,
}

impl ServiceRegistry {
    /// Build a registry from an explicit name → URL map.
    pub fn new(upstreams: HashMap<ServiceName, String>) -> Self {
        Self { upstreams }
    }

    /// Build a registry from the mesh configuration.
    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new(config.upstreams.clone())
    }

    /// Pure lookup of the upstream URL for a logical service.
    pub fn resolve(&self, name: ServiceName) -> Result<&str, RegistryError> {
        self.upstreams
            .get(&name)
            .map(String::as_str)
            .ok_or(RegistryError::UnknownService(name))
    }
}
