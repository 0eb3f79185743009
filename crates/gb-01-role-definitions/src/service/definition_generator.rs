//! Definition Generator
//!
//! Orchestrates seed reconciliation, identity derivation and topology into a
//! complete `RoleSet`.

use shared_types::Role;
use tracing::{debug, info};

use crate::adapters::Ed25519IdentityDeriver;
use crate::domain::{
    reconcile_seeds, DefinitionRequest, IdentityDefinition, NodeDefinition, NormalizedSeed,
    RoleSet, Topology,
};
use crate::error::DefinitionError;
use crate::ports::{IdentityDeriver, RoleDefinitionApi};

/// Role definition service implementation
///
/// Implements the `RoleDefinitionApi` port using an injected deriver.
pub struct DefinitionGenerator<D: IdentityDeriver = Ed25519IdentityDeriver> {
    deriver: D,
}

impl Default for DefinitionGenerator {
    fn default() -> Self {
        Self::new(Ed25519IdentityDeriver)
    }
}

impl<D: IdentityDeriver> DefinitionGenerator<D> {
    /// Create a generator backed by `deriver`
    pub fn new(deriver: D) -> Self {
        Self { deriver }
    }

    fn identity(
        &self,
        role: Role,
        index: usize,
        seed: NormalizedSeed,
    ) -> Result<IdentityDefinition, DefinitionError> {
        let derived = self
            .deriver
            .derive(seed.as_bytes())
            .map_err(|source| DefinitionError::KeyDerivation { role, index, source })?;

        debug!(role = %role, index, did = %derived.did, "Derived identity");

        Ok(IdentityDefinition {
            name: role.alias(index),
            role,
            index,
            seed,
            did: derived.did,
            verkey: derived.verkey,
            abbreviated_verkey: derived.abbreviated_verkey,
        })
    }

    fn identities(
        &self,
        role: Role,
        seeds: Vec<NormalizedSeed>,
    ) -> Result<Vec<IdentityDefinition>, DefinitionError> {
        seeds
            .into_iter()
            .enumerate()
            .map(|(offset, seed)| self.identity(role, offset + 1, seed))
            .collect()
    }
}

impl<D: IdentityDeriver> RoleDefinitionApi for DefinitionGenerator<D> {
    fn resolve_topology(&self, request: &DefinitionRequest) -> Result<Topology, DefinitionError> {
        let topology =
            Topology::resolve(request.ips.as_deref(), request.node_count, request.base_port)?;
        for endpoint in &topology.endpoints {
            debug!(
                index = endpoint.index,
                ip = %endpoint.ip,
                node_port = endpoint.node_port,
                client_port = endpoint.client_port,
                "Resolved node endpoint"
            );
        }
        Ok(topology)
    }

    fn derive_roles(
        &self,
        request: &DefinitionRequest,
        topology: &Topology,
    ) -> Result<RoleSet, DefinitionError> {
        let node_count = topology.endpoints.len();

        // Every seed is validated before the first derivation runs.
        let trustee_seeds = reconcile_seeds(
            request.trustee_seeds.as_deref(),
            request.trustee_count(),
            Role::Trustee,
        )?;
        let steward_seeds =
            reconcile_seeds(request.steward_seeds.as_deref(), node_count, Role::Steward)?;
        let node_seeds = reconcile_seeds(request.node_seeds.as_deref(), node_count, Role::Node)?;
        let client_seeds = reconcile_seeds(None, request.client_count, Role::Client)?;

        let trustees = self.identities(Role::Trustee, trustee_seeds)?;
        let stewards = self.identities(Role::Steward, steward_seeds)?;
        let clients = self.identities(Role::Client, client_seeds)?;

        let nodes = node_seeds
            .into_iter()
            .zip(&topology.endpoints)
            .zip(&stewards)
            .map(|((seed, endpoint), steward)| {
                let identity = self.identity(Role::Node, endpoint.index, seed)?;
                Ok(NodeDefinition {
                    identity,
                    ip: endpoint.ip.clone(),
                    node_port: endpoint.node_port,
                    client_port: endpoint.client_port,
                    steward_did: steward.did.clone(),
                })
            })
            .collect::<Result<Vec<_>, DefinitionError>>()?;

        info!(
            trustees = trustees.len(),
            stewards = stewards.len(),
            nodes = nodes.len(),
            clients = clients.len(),
            "Derived role definitions"
        );

        Ok(RoleSet {
            trustees,
            stewards,
            nodes,
            clients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SeedError, TopologyError};
    use proptest::prelude::*;
    use shared_crypto::{CryptoError, DerivedIdentity};
    use std::cell::Cell;

    /// Counts derivations so tests can prove validation happens first.
    #[derive(Default)]
    struct CountingDeriver {
        calls: Cell<usize>,
    }

    impl IdentityDeriver for CountingDeriver {
        fn derive(&self, seed: &[u8]) -> Result<DerivedIdentity, CryptoError> {
            self.calls.set(self.calls.get() + 1);
            shared_crypto::derive_identity(seed)
        }
    }

    fn seed32(tag: char) -> String {
        std::iter::repeat(tag).take(32).collect()
    }

    #[test]
    fn test_default_role_set_shape() {
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(4, 2))
            .unwrap();

        assert_eq!(roles.trustees.len(), 1);
        assert_eq!(roles.stewards.len(), 4);
        assert_eq!(roles.nodes.len(), 4);
        assert_eq!(roles.clients.len(), 2);
        assert_eq!(roles.trustees[0].name, "Trustee1");
        assert_eq!(roles.clients[1].name, "Client2");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_default_seeds_follow_role_template(node_count in 1usize..=100) {
            let roles = DefinitionGenerator::default()
                .generate(&DefinitionRequest::new(node_count, 0))
                .unwrap();

            prop_assert_eq!(roles.stewards.len(), node_count);
            prop_assert_eq!(roles.nodes.len(), node_count);
            for (i, (steward, node)) in roles.stewards.iter().zip(&roles.nodes).enumerate() {
                let index = i + 1;
                prop_assert_eq!(steward.seed.as_str(), format!("{:0>32}", format!("Steward{}", index)));
                prop_assert_eq!(node.seed().as_str(), format!("{:0>32}", format!("Node{}", index)));
            }
        }
    }

    #[test]
    fn test_default_seeds_at_pool_limit() {
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(100, 0))
            .unwrap();

        assert_eq!(roles.stewards[99].seed.as_str(), "0000000000000000000000Steward100");
        assert_eq!(roles.nodes[99].seed().as_str(), "0000000000000000000000000Node100");
    }

    #[test]
    fn test_node_links_to_its_steward() {
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(3, 0))
            .unwrap();

        for (steward, node) in roles.stewards.iter().zip(&roles.nodes) {
            assert_eq!(node.steward_did, steward.did);
            assert_eq!(node.index(), steward.index);
        }
    }

    #[test]
    fn test_node_three_ports() {
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(4, 2))
            .unwrap();
        let node = roles.node(3).unwrap();
        assert_eq!((node.node_port, node.client_port), (9705, 9706));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let request = DefinitionRequest::new(5, 3)
            .with_steward_seeds(vec![seed32('s')])
            .with_trustee_seeds(vec![seed32('t'), seed32('u')]);
        let a = DefinitionGenerator::default().generate(&request).unwrap();
        let b = DefinitionGenerator::default().generate(&request).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.trustees.len(), 2);
    }

    #[test]
    fn test_bad_seed_fails_before_any_derivation() {
        let generator = DefinitionGenerator::new(CountingDeriver::default());
        let request = DefinitionRequest::new(4, 2).with_steward_seeds(vec!["abc".to_string()]);

        let err = generator.generate(&request).unwrap_err();

        assert!(matches!(
            err,
            DefinitionError::InvalidSeed {
                role: Role::Steward,
                index: 1,
                source: SeedError::WrongLength { len: 3, expected: 32 },
            }
        ));
        assert_eq!(generator.deriver.calls.get(), 0);
    }

    #[test]
    fn test_multibyte_seed_is_key_derivation_error() {
        // 32 characters, more than 32 bytes.
        let seed: String = std::iter::repeat('é').take(32).collect();
        let request = DefinitionRequest::new(1, 0).with_node_seeds(vec![seed]);

        let err = DefinitionGenerator::default().generate(&request).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::KeyDerivation { role: Role::Node, index: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_node_count() {
        let err = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(0, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::InvalidTopology(TopologyError::NodeCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_hostname_topology() {
        let request = DefinitionRequest::new(3, 0)
            .with_ips(vec!["node-a.example.com".into(), "10.0.0.5".into()]);
        let roles = DefinitionGenerator::default().generate(&request).unwrap();
        let ips: Vec<&str> = roles.nodes.iter().map(|n| n.ip.as_str()).collect();
        assert_eq!(ips, vec!["node-a.example.com", "10.0.0.5", "127.0.0.1"]);
    }
}
