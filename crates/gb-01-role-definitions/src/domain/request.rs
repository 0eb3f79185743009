//! Input to role generation.
//!
//! # Example
//!
//! ```ignore
//! use gb_01_role_definitions::DefinitionRequest;
//!
//! let request = DefinitionRequest::new(4, 2)
//!     .with_ips(vec!["10.0.0.1".into()])
//!     .with_base_port(9700);
//! ```

use std::fmt;

use shared_types::DEFAULT_BASE_PORT;

/// Everything that determines a `RoleSet`.
///
/// Already split and trimmed by the CLI layer; validation happens during
/// generation so each error can name the role and slot it belongs to.
#[derive(Clone, PartialEq, Eq)]
pub struct DefinitionRequest {
    pub node_count: usize,
    pub client_count: usize,
    pub ips: Option<Vec<String>>,
    pub steward_seeds: Option<Vec<String>>,
    pub node_seeds: Option<Vec<String>>,
    pub trustee_seeds: Option<Vec<String>>,
    pub base_port: u16,
}

impl DefinitionRequest {
    /// Request with synthesized seeds, loopback IPs and the default base port.
    pub fn new(node_count: usize, client_count: usize) -> Self {
        Self {
            node_count,
            client_count,
            ips: None,
            steward_seeds: None,
            node_seeds: None,
            trustee_seeds: None,
            base_port: DEFAULT_BASE_PORT,
        }
    }

    pub fn with_ips(mut self, ips: Vec<String>) -> Self {
        self.ips = Some(ips);
        self
    }

    pub fn with_steward_seeds(mut self, seeds: Vec<String>) -> Self {
        self.steward_seeds = Some(seeds);
        self
    }

    pub fn with_node_seeds(mut self, seeds: Vec<String>) -> Self {
        self.node_seeds = Some(seeds);
        self
    }

    pub fn with_trustee_seeds(mut self, seeds: Vec<String>) -> Self {
        self.trustee_seeds = Some(seeds);
        self
    }

    pub fn with_base_port(mut self, base_port: u16) -> Self {
        self.base_port = base_port;
        self
    }

    /// Trustee slots: one per supplied seed, at least one.
    pub fn trustee_count(&self) -> usize {
        self.trustee_seeds
            .as_ref()
            .map(Vec::len)
            .unwrap_or(0)
            .max(1)
    }
}

// Seeds are secret; show only how many were supplied.
impl fmt::Debug for DefinitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |seeds: &Option<Vec<String>>| seeds.as_ref().map(Vec::len);
        f.debug_struct("DefinitionRequest")
            .field("node_count", &self.node_count)
            .field("client_count", &self.client_count)
            .field("ips", &self.ips)
            .field("steward_seeds", &count(&self.steward_seeds))
            .field("node_seeds", &count(&self.node_seeds))
            .field("trustee_seeds", &count(&self.trustee_seeds))
            .field("base_port", &self.base_port)
            .finish()
    }
}
