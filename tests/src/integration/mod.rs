//! Cross-crate bootstrap runs.

pub mod determinism;
pub mod scenarios;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::Path;

    use bootstrap_runtime::{BootstrapConfig, NetworkPaths};
    use gb_03_genesis_txns::GenesisTxn;
    use shared_types::LedgerId;

    pub fn config(base: &Path) -> BootstrapConfig {
        BootstrapConfig::default().with_base_dir(base)
    }

    pub fn ledger_text(config: &BootstrapConfig, ledger: LedgerId) -> String {
        let path = NetworkPaths::new(config)
            .genesis_dir
            .join(ledger.genesis_file_name());
        fs::read_to_string(path).unwrap()
    }

    pub fn ledger(config: &BootstrapConfig, ledger: LedgerId) -> Vec<GenesisTxn> {
        ledger_text(config, ledger)
            .lines()
            .map(|line| GenesisTxn::from_json_line(line).unwrap())
            .collect()
    }

    pub fn seed(label: &str) -> String {
        format!("{:0>32}", label)
    }
}
