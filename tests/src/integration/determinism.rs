//! # Determinism
//!
//! Two machines given the same input must write byte-identical genesis
//! files, whichever nodes each of them runs locally.

#[cfg(test)]
mod tests {
    use bootstrap_runtime::{generate, BootstrapRequest};
    use gb_01_role_definitions::{DefinitionGenerator, DefinitionRequest, RoleDefinitionApi};
    use shared_types::LedgerId;
    use tempfile::TempDir;

    use crate::integration::fixtures::{config, ledger_text, seed};

    fn request() -> DefinitionRequest {
        DefinitionRequest::new(4, 2)
            .with_ips(vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()])
            .with_steward_seeds(vec![seed("StewardSeedA"), seed("StewardSeedB")])
    }

    #[test]
    fn test_machines_agree_on_genesis_files() {
        let machine_a = TempDir::new().unwrap();
        let machine_b = TempDir::new().unwrap();
        let config_a = config(machine_a.path());
        let config_b = config(machine_b.path());

        generate(&config_a, &BootstrapRequest::new(request()).with_local_nodes([1, 2])).unwrap();
        generate(&config_b, &BootstrapRequest::new(request()).with_local_nodes([3, 4])).unwrap();

        for ledger in [LedgerId::Domain, LedgerId::Pool] {
            assert_eq!(
                ledger_text(&config_a, ledger),
                ledger_text(&config_b, ledger),
                "{} ledger differs",
                ledger
            );
        }
    }

    #[test]
    fn test_generation_is_repeatable() {
        let generator = DefinitionGenerator::default();
        let first = generator.generate(&request()).unwrap();
        let second = generator.generate(&request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_genesis_lines_are_compact_json() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        generate(&config, &BootstrapRequest::new(request())).unwrap();

        for line in ledger_text(&config, LedgerId::Domain).lines() {
            assert!(line.starts_with(r#"{"reqSignature":{},"txn":{"data":"#));
            assert!(line.ends_with(r#""ver":"1"}"#));
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["txn"]["type"], "1");
        }
    }
}
