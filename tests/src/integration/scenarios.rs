//! # Bootstrap Scenarios
//!
//! Full `generate` runs on a temp directory, checked through the files they
//! leave behind.

#[cfg(test)]
mod tests {
    use std::fs;

    use bootstrap_runtime::{clean, generate, BootstrapPhase, BootstrapRequest, NetworkPaths};
    use gb_01_role_definitions::{DefinitionError, DefinitionRequest};
    use gb_03_genesis_txns::TxnData;
    use gb_04_genesis_ledger::WriteMode;
    use shared_crypto::{derive_identity, verify_key_material, BlsKeyMaterial};
    use shared_types::{LedgerId, LOOPBACK_IP};
    use tempfile::TempDir;

    use crate::integration::fixtures::{config, ledger, ledger_text, seed};

    // =========================================================================
    // SHAPE
    // =========================================================================

    #[test]
    fn test_four_nodes_two_clients() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());

        let report = generate(
            &config,
            &BootstrapRequest::new(DefinitionRequest::new(4, 2)),
        )
        .unwrap();

        let domain = ledger(&config, LedgerId::Domain);
        let pool = ledger(&config, LedgerId::Pool);
        assert_eq!(domain.len(), 7);
        assert_eq!(pool.len(), 4);
        assert_eq!(report.nodes[2].node_port, 9705);
        assert_eq!(report.nodes[2].client_port, 9706);

        let seq: Vec<u64> = domain.iter().map(|t| t.seq_no()).collect();
        assert_eq!(seq, (1..=7).collect::<Vec<_>>());
        let seq: Vec<u64> = pool.iter().map(|t| t.seq_no()).collect();
        assert_eq!(seq, (1..=4).collect::<Vec<_>>());
    }

    #[test]
    fn test_pool_entries_carry_valid_bls_material() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        generate(&config, &BootstrapRequest::new(DefinitionRequest::new(3, 0))).unwrap();

        for txn in ledger(&config, LedgerId::Pool) {
            let TxnData::Node(node) = &txn.txn.data else {
                panic!("pool entry {} is not a node registration", txn.seq_no());
            };
            let material = BlsKeyMaterial {
                key: node.data.blskey.clone(),
                pop: node.data.blskey_pop.clone(),
            };
            assert!(verify_key_material(&material).is_ok(), "{}", node.data.alias);
            assert_eq!(node.data.services, vec!["VALIDATOR".to_string()]);
        }
    }

    #[test]
    fn test_supplied_trustee_seed_is_first_grant() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        let trustee_seed = seed("MyTrustee");
        let request = BootstrapRequest::new(
            DefinitionRequest::new(1, 0).with_trustee_seeds(vec![trustee_seed.clone()]),
        );

        generate(&config, &request).unwrap();

        let expected = derive_identity(trustee_seed.as_bytes()).unwrap();
        let domain = ledger(&config, LedgerId::Domain);
        let TxnData::Nym(trustee) = &domain[0].txn.data else {
            panic!("first domain entry is not a role grant");
        };
        assert_eq!(trustee.dest, expected.did);
        assert_eq!(trustee.verkey, expected.abbreviated_verkey);
        assert_eq!(trustee.role.as_deref(), Some("0"));
    }

    // =========================================================================
    // FAILURES LEAVE NOTHING BEHIND
    // =========================================================================

    #[test]
    fn test_short_steward_seed_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        let request = BootstrapRequest::new(
            DefinitionRequest::new(4, 0).with_steward_seeds(vec!["abc".to_string()]),
        )
        .with_local_nodes([1]);

        let err = generate(&config, &request).unwrap_err();

        assert_eq!(err.phase(), Some(BootstrapPhase::IdentitiesDerived));
        assert!(matches!(
            err.stage_error(),
            Some(bootstrap_runtime::StageError::Definition(DefinitionError::InvalidSeed { .. }))
        ));
        let paths = NetworkPaths::new(&config);
        assert!(!paths.genesis_dir.exists());
        assert!(!paths.keys_dir.exists());
    }

    #[test]
    fn test_failed_rerun_keeps_previous_genesis() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        generate(&config, &BootstrapRequest::new(DefinitionRequest::new(2, 0))).unwrap();
        let before = ledger_text(&config, LedgerId::Pool);

        let bad = BootstrapRequest::new(
            DefinitionRequest::new(2, 0).with_node_seeds(vec!["short".to_string()]),
        );
        assert!(generate(&config, &bad).is_err());

        assert_eq!(ledger_text(&config, LedgerId::Pool), before);
    }

    // =========================================================================
    // TOPOLOGY
    // =========================================================================

    #[test]
    fn test_hostname_and_loopback_fallback() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        let request = BootstrapRequest::new(DefinitionRequest::new(3, 0).with_ips(vec![
            "node-a.example.com".to_string(),
            "10.0.0.5".to_string(),
        ]))
        .with_local_nodes([1, 3]);

        let report = generate(&config, &request).unwrap();

        let ips: Vec<&str> = report.nodes.iter().map(|n| n.ip.as_str()).collect();
        assert_eq!(ips, vec!["node-a.example.com", "10.0.0.5", LOOPBACK_IP]);

        let keys_dir = NetworkPaths::new(&config).keys_dir;
        let params = fs::read_to_string(keys_dir.join("Node1/node.env")).unwrap();
        assert!(params.contains("NODE_IP=0.0.0.0\n"));
        assert!(params.contains("CLIENT_CONNECTIONS_LIMIT=500\n"));
        assert!(!keys_dir.join("Node3/node.env").exists());
        assert!(keys_dir.join("Node3/bls_keys/bls_pk").is_file());
    }

    // =========================================================================
    // APPEND AND CLEAN
    // =========================================================================

    #[test]
    fn test_append_continues_sequence_numbers() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        let request = BootstrapRequest::new(DefinitionRequest::new(2, 1));

        generate(&config, &request).unwrap();
        generate(&config, &request.clone().with_write_mode(WriteMode::Append)).unwrap();

        let domain: Vec<u64> = ledger(&config, LedgerId::Domain)
            .iter()
            .map(|t| t.seq_no())
            .collect();
        assert_eq!(domain, (1..=8).collect::<Vec<_>>());
        assert_eq!(ledger(&config, LedgerId::Pool).len(), 4);
    }

    #[test]
    fn test_reset_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());

        generate(&config, &BootstrapRequest::new(DefinitionRequest::new(4, 3))).unwrap();
        generate(&config, &BootstrapRequest::new(DefinitionRequest::new(1, 0))).unwrap();

        assert_eq!(ledger(&config, LedgerId::Domain).len(), 2);
        assert_eq!(ledger(&config, LedgerId::Pool).len(), 1);
    }

    #[test]
    fn test_clean_after_generate() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        generate(
            &config,
            &BootstrapRequest::new(DefinitionRequest::new(1, 0)).with_local_nodes([1]),
        )
        .unwrap();

        clean(&config, false).unwrap();

        let paths = NetworkPaths::new(&config);
        assert!(!paths.genesis_dir.exists());
        assert!(paths.ledger_base_dir.exists());
    }
}
