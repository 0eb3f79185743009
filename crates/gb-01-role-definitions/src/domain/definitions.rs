//! Role definitions produced by the generator.

use shared_types::{Did, Role, Verkey};

use super::seed::NormalizedSeed;

/// One trustee, steward, client, or the identity half of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityDefinition {
    /// Alias, e.g. `Steward2`.
    pub name: String,
    pub role: Role,
    /// 1-based slot within the role.
    pub index: usize,
    pub seed: NormalizedSeed,
    pub did: Did,
    pub verkey: Verkey,
    pub abbreviated_verkey: Verkey,
}

/// A validator node: its identity, where it listens, and who sponsors it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDefinition {
    pub identity: IdentityDefinition,
    pub ip: String,
    pub node_port: u16,
    pub client_port: u16,
    /// DID of the steward that owns this node.
    pub steward_did: Did,
}

impl NodeDefinition {
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn index(&self) -> usize {
        self.identity.index
    }

    pub fn seed(&self) -> &NormalizedSeed {
        &self.identity.seed
    }

    pub fn verkey(&self) -> &Verkey {
        &self.identity.verkey
    }
}

/// Every participant of the pool, each list ascending by slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleSet {
    pub trustees: Vec<IdentityDefinition>,
    pub stewards: Vec<IdentityDefinition>,
    pub nodes: Vec<NodeDefinition>,
    pub clients: Vec<IdentityDefinition>,
}

impl RoleSet {
    /// The trustee that grants every other role. `None` only for a
    /// hand-built, empty set.
    pub fn first_trustee(&self) -> Option<&IdentityDefinition> {
        self.trustees.first()
    }

    pub fn steward_by_did(&self, did: &Did) -> Option<&IdentityDefinition> {
        self.stewards.iter().find(|steward| &steward.did == did)
    }

    /// Node in slot `index` (1-based).
    pub fn node(&self, index: usize) -> Option<&NodeDefinition> {
        index.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
