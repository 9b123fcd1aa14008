//! Configuration schema definitions.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `--port` is not given.
pub const DEFAULT_PORT: u16 = 7654;

/// UDP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Port to receive commands on. Bound on all IPv4 interfaces.
    pub port: u16,
}

impl ListenerConfig {
    /// Address the command socket binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
