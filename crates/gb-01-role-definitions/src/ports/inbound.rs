//! Inbound Ports (Driving Ports)

use crate::domain::{DefinitionRequest, RoleSet, Topology};
use crate::error::DefinitionError;

/// Primary role definition API (Driving Port)
pub trait RoleDefinitionApi {
    /// Resolve every node's IP and port pair.
    fn resolve_topology(&self, request: &DefinitionRequest) -> Result<Topology, DefinitionError>;

    /// Derive trustees, stewards, nodes and clients on top of a resolved
    /// topology.
    ///
    /// Fails on the first malformed seed or rejected derivation; nothing is
    /// returned partially.
    fn derive_roles(
        &self,
        request: &DefinitionRequest,
        topology: &Topology,
    ) -> Result<RoleSet, DefinitionError>;

    /// `resolve_topology` followed by `derive_roles`.
    fn generate(&self, request: &DefinitionRequest) -> Result<RoleSet, DefinitionError> {
        let topology = self.resolve_topology(request)?;
        self.derive_roles(request, &topology)
    }
}
