//! Genesis Transaction Builder

use gb_01_role_definitions::{IdentityDefinition, RoleSet};
use gb_02_local_keys::NodeKeys;
use shared_types::{Did, LedgerId};
use tracing::{debug, info};

use crate::domain::{GenesisTransactions, GenesisTxn};
use crate::error::GenesisTxnError;
use crate::ports::GenesisTxnApi;

/// Per-ledger sequence counter, starting at 1.
#[derive(Debug)]
struct Sequence {
    ledger: LedgerId,
    next: u64,
}

impl Sequence {
    fn new(ledger: LedgerId) -> Self {
        Self { ledger, next: 1 }
    }

    fn advance(&mut self) -> u64 {
        let seq_no = self.next;
        self.next += 1;
        seq_no
    }
}

/// Builds the domain and pool genesis transactions in their fixed order.
#[derive(Debug, Default)]
pub struct GenesisTransactionBuilder;

impl GenesisTransactionBuilder {
    pub fn new() -> Self {
        Self
    }

    fn grant(
        seq: &mut Sequence,
        out: &mut Vec<GenesisTxn>,
        identities: &[IdentityDefinition],
        creator: Option<&Did>,
    ) {
        for identity in identities {
            let seq_no = seq.advance();
            debug!(ledger = %seq.ledger, seq_no, alias = %identity.name, "Role grant");
            out.push(GenesisTxn::nym(seq_no, identity, creator));
        }
    }
}

impl GenesisTxnApi for GenesisTransactionBuilder {
    fn build(
        &self,
        roles: &RoleSet,
        node_keys: &[NodeKeys],
    ) -> Result<GenesisTransactions, GenesisTxnError> {
        let mut txns = GenesisTransactions::default();

        let mut domain = Sequence::new(LedgerId::Domain);
        Self::grant(&mut domain, &mut txns.domain, &roles.trustees, None);

        if !roles.stewards.is_empty() || !roles.clients.is_empty() {
            let creator = &roles
                .first_trustee()
                .ok_or(GenesisTxnError::MissingTrustee)?
                .did;
            Self::grant(&mut domain, &mut txns.domain, &roles.stewards, Some(creator));
            Self::grant(&mut domain, &mut txns.domain, &roles.clients, Some(creator));
        }

        let mut pool = Sequence::new(LedgerId::Pool);
        for node in &roles.nodes {
            let sponsor = roles.steward_by_did(&node.steward_did).ok_or_else(|| {
                GenesisTxnError::MissingSponsor {
                    node: node.name().to_string(),
                    steward: node.steward_did.clone(),
                }
            })?;
            let keys = node_keys
                .iter()
                .find(|keys| keys.index == node.index())
                .ok_or_else(|| GenesisTxnError::MissingNodeKeys {
                    node: node.name().to_string(),
                })?;

            let seq_no = pool.advance();
            debug!(ledger = %pool.ledger, seq_no, alias = node.name(), "Node registration");
            txns.pool
                .push(GenesisTxn::node(seq_no, node, keys, &sponsor.did));
        }

        info!(
            domain = txns.domain.len(),
            pool = txns.pool.len(),
            "Built genesis transactions"
        );
        Ok(txns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TxnData;
    use gb_01_role_definitions::{DefinitionGenerator, DefinitionRequest, RoleDefinitionApi};
    use gb_02_local_keys::{InMemoryKeyStore, InMemoryParamsSink, KeyMaterializerApi, LocalKeyMaterializer};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn inputs(nodes: usize, clients: usize) -> (RoleSet, Vec<NodeKeys>) {
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(nodes, clients))
            .unwrap();
        let keys = LocalKeyMaterializer::new(InMemoryKeyStore::new(), InMemoryParamsSink::new())
            .materialize_all(&roles, &BTreeSet::new())
            .unwrap();
        (roles, keys)
    }

    fn seq_nos(txns: &[GenesisTxn]) -> Vec<u64> {
        txns.iter().map(GenesisTxn::seq_no).collect()
    }

    #[test]
    fn test_four_nodes_two_clients() {
        let (roles, keys) = inputs(4, 2);
        let txns = GenesisTransactionBuilder::new().build(&roles, &keys).unwrap();

        assert_eq!(txns.domain.len(), 7);
        assert_eq!(txns.pool.len(), 4);
        assert_eq!(seq_nos(&txns.domain), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(seq_nos(&txns.pool), vec![1, 2, 3, 4]);

        let aliases: Vec<&str> = txns.domain.iter().map(GenesisTxn::alias).collect();
        assert_eq!(
            aliases,
            vec!["Trustee1", "Steward1", "Steward2", "Steward3", "Steward4", "Client1", "Client2"]
        );
    }

    #[test]
    fn test_creators() {
        let (roles, keys) = inputs(2, 1);
        let txns = GenesisTransactionBuilder::new().build(&roles, &keys).unwrap();
        let trustee = &roles.trustees[0].did;

        assert_eq!(txns.domain[0].txn.metadata.from, None);
        for txn in &txns.domain[1..] {
            assert_eq!(txn.txn.metadata.from.as_ref(), Some(trustee));
        }
        for (txn, steward) in txns.pool.iter().zip(&roles.stewards) {
            assert_eq!(txn.txn.metadata.from.as_ref(), Some(&steward.did));
        }
    }

    #[test]
    fn test_node_txn_carries_endpoint_and_keys() {
        let (roles, keys) = inputs(4, 0);
        let txns = GenesisTransactionBuilder::new().build(&roles, &keys).unwrap();

        let TxnData::Node(node3) = &txns.pool[2].txn.data else {
            panic!("pool entry is not a node registration");
        };
        assert_eq!(node3.data.alias, "Node3");
        assert_eq!(node3.data.node_port, 9705);
        assert_eq!(node3.data.client_port, 9706);
        assert_eq!(node3.dest, keys[2].verkey);
        assert_eq!(node3.data.blskey, keys[2].bls.key);
    }

    #[test]
    fn test_unknown_sponsor_rejected() {
        let (mut roles, keys) = inputs(2, 0);
        roles.nodes[1].steward_did = Did::new("Nobody");

        let result = GenesisTransactionBuilder::new().build(&roles, &keys);
        assert!(matches!(
            result,
            Err(GenesisTxnError::MissingSponsor { ref node, .. }) if node == "Node2"
        ));
    }

    #[test]
    fn test_missing_keys_rejected() {
        let (roles, keys) = inputs(3, 0);
        let result = GenesisTransactionBuilder::new().build(&roles, &keys[..2]);
        assert!(matches!(result, Err(GenesisTxnError::MissingNodeKeys { .. })));
    }

    #[test]
    fn test_no_trustee_with_stewards_rejected() {
        let (mut roles, keys) = inputs(1, 0);
        roles.trustees.clear();
        assert!(matches!(
            GenesisTransactionBuilder::new().build(&roles, &keys),
            Err(GenesisTxnError::MissingTrustee)
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_sequence_numbers_are_contiguous(nodes in 1usize..8, clients in 0usize..6) {
            let (roles, keys) = inputs(nodes, clients);
            let txns = GenesisTransactionBuilder::new().build(&roles, &keys).unwrap();

            let domain_len = txns.domain.len() as u64;
            let pool_len = txns.pool.len() as u64;
            prop_assert_eq!(domain_len, (1 + nodes + clients) as u64);
            prop_assert_eq!(seq_nos(&txns.domain), (1..=domain_len).collect::<Vec<_>>());
            prop_assert_eq!(seq_nos(&txns.pool), (1..=pool_len).collect::<Vec<_>>());
        }
    }
}
