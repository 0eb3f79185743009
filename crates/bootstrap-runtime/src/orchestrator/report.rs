//! Run summary.

use std::path::PathBuf;

use gb_01_role_definitions::RoleSet;
use gb_02_local_keys::NodeKeys;
use gb_04_genesis_ledger::LedgerSummary;
use shared_types::Verkey;
use tracing::info;

/// One node as registered in the pool ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub alias: String,
    pub ip: String,
    pub node_port: u16,
    pub client_port: u16,
    pub verkey: Verkey,
    /// Private keys were written on this machine.
    pub local: bool,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub genesis_dir: PathBuf,
    pub trustees: usize,
    pub stewards: usize,
    pub clients: usize,
    pub nodes: Vec<NodeSummary>,
    pub domain: LedgerSummary,
    pub pool: LedgerSummary,
}

impl BootstrapReport {
    pub fn new(
        roles: &RoleSet,
        keys: &[NodeKeys],
        domain: LedgerSummary,
        pool: LedgerSummary,
        genesis_dir: PathBuf,
    ) -> Self {
        let nodes = roles
            .nodes
            .iter()
            .map(|node| {
                let local = keys
                    .iter()
                    .any(|k| k.index == node.index() && k.local);
                NodeSummary {
                    alias: node.name().to_string(),
                    ip: node.ip.clone(),
                    node_port: node.node_port,
                    client_port: node.client_port,
                    verkey: node.verkey().clone(),
                    local,
                }
            })
            .collect();

        Self {
            genesis_dir,
            trustees: roles.trustees.len(),
            stewards: roles.stewards.len(),
            clients: roles.clients.len(),
            nodes,
            domain,
            pool,
        }
    }

    pub fn local_nodes(&self) -> impl Iterator<Item = &NodeSummary> {
        self.nodes.iter().filter(|node| node.local)
    }

    pub fn log(&self) {
        for node in &self.nodes {
            info!(
                node = %node.alias,
                ip = %node.ip,
                node_port = node.node_port,
                client_port = node.client_port,
                verkey = %node.verkey,
                local = node.local,
                "Node registered"
            );
        }
        info!(
            genesis_dir = %self.genesis_dir.display(),
            trustees = self.trustees,
            stewards = self.stewards,
            clients = self.clients,
            domain_txns = self.domain.total,
            pool_txns = self.pool.total,
            "Bootstrap complete"
        );
    }
}
