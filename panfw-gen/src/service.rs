//! Run-scoped registry of generated service definitions.
//!
//! Services are keyed by their ordered port list plus protocol name. The
//! registry lives for a whole translation run, so the same (ports, protocol)
//! pair requested by different terms resolves to one shared service entry.

use serde::Serialize;
use thiserror::Error;

use crate::policy::PortRange;

/// Longest service name the device accepts.
pub const MAX_SERVICE_NAME_LENGTH: usize = 63;

/// Errors raised while registering services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("you have a duplicate service: port(s) {ports} already registered for {protocol}")]
    DuplicateKey { ports: String, protocol: String },
    #[error("you have a duplicate service: a service named {name} already exists")]
    DuplicateName { name: String },
    #[error("service name must be 63 characters max: {name}")]
    NameTooLong { name: String },
}

/// One generated service definition.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEntry {
    pub name: String,
    pub protocol: String,
    pub ports: Vec<PortRange>,
}

/// Registry of service definitions, iterated in registration order.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    entries: Vec<ServiceEntry>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the name registered for `(ports, protocol)`, creating the
    /// entry if the key is new.
    pub fn get_or_create(
        &mut self,
        ports: &[PortRange],
        protocol: &str,
        term_name: &str,
    ) -> Result<String, ServiceError> {
        if let Some(entry) = self.find(ports, protocol) {
            return Ok(entry.name.clone());
        }
        self.insert(ports, protocol, term_name)
    }

    /// Register a new service, failing on a duplicate key, a name collision
    /// with a different key, or an over-long generated name.
    pub fn insert(
        &mut self,
        ports: &[PortRange],
        protocol: &str,
        term_name: &str,
    ) -> Result<String, ServiceError> {
        if self.find(ports, protocol).is_some() {
            return Err(ServiceError::DuplicateKey {
                ports: render_port_list(ports),
                protocol: protocol.to_string(),
            });
        }

        let name = format!("service-{}-{}", term_name, protocol);
        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(ServiceError::DuplicateName { name });
        }
        if name.len() > MAX_SERVICE_NAME_LENGTH {
            return Err(ServiceError::NameTooLong { name });
        }

        self.entries.push(ServiceEntry {
            name: name.clone(),
            protocol: protocol.to_string(),
            ports: ports.to_vec(),
        });
        Ok(name)
    }

    fn find(&self, ports: &[PortRange], protocol: &str) -> Option<&ServiceEntry> {
        self.entries
            .iter()
            .find(|entry| entry.protocol == protocol && entry.ports == ports)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Render one port range as `N` or `N-M`.
pub fn render_port(port: &PortRange) -> String {
    if port.0 == port.1 {
        port.0.to_string()
    } else {
        format!("{}-{}", port.0, port.1)
    }
}

/// Render an ordered port list as the comma-joined form used in service
/// entries.
pub fn render_port_list(ports: &[PortRange]) -> String {
    ports
        .iter()
        .map(render_port)
        .collect::<Vec<_>>()
        .join(",")
}
