//! Parameters handed to the process that runs a non-loopback local node.

use gb_01_role_definitions::{is_loopback, NodeDefinition};
use shared_types::BIND_ALL_IP;

/// Default limit on simultaneous client connections per node.
pub const CLIENT_CONNECTIONS_LIMIT: u32 = 500;

/// `KEY=value` environment file for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeParams {
    pub node_name: String,
    pub node_ip: String,
    pub node_port: u16,
    pub client_ip: String,
    pub client_port: u16,
    pub client_connections_limit: u32,
}

impl NodeParams {
    /// Parameters for `node`, or `None` when it stays on loopback.
    pub fn for_node(node: &NodeDefinition, client_connections_limit: u32) -> Option<Self> {
        if is_loopback(&node.ip) {
            return None;
        }
        Some(Self {
            node_name: node.name().to_string(),
            node_ip: BIND_ALL_IP.to_string(),
            node_port: node.node_port,
            client_ip: BIND_ALL_IP.to_string(),
            client_port: node.client_port,
            client_connections_limit,
        })
    }

    /// File contents, one `KEY=value` per line.
    pub fn render(&self) -> String {
        format!(
            "NODE_NAME={}\nNODE_IP={}\nNODE_PORT={}\nNODE_CLIENT_IP={}\nNODE_CLIENT_PORT={}\nCLIENT_CONNECTIONS_LIMIT={}\n",
            self.node_name,
            self.node_ip,
            self.node_port,
            self.client_ip,
            self.client_port,
            self.client_connections_limit
        )
    }
}
