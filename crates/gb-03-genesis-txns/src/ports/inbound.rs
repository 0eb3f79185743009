//! Inbound port for genesis transaction assembly.

use gb_01_role_definitions::RoleSet;
use gb_02_local_keys::NodeKeys;

use crate::domain::GenesisTransactions;
use crate::error::GenesisTxnError;

/// Assembles both genesis ledgers from role definitions and node keys.
pub trait GenesisTxnApi {
    /// `node_keys` holds one entry per node, matched by node index.
    fn build(
        &self,
        roles: &RoleSet,
        node_keys: &[NodeKeys],
    ) -> Result<GenesisTransactions, GenesisTxnError>;
}
