pub mod proxy;
pub mod registry;

pub use proxy::{ForwardingProxy, ProxyOutcome};
pub use registry::{RegistryError, ServiceRegistry};
