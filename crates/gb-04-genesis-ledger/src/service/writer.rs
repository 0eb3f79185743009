//! Writes a built transaction set to both genesis ledgers.

use std::path::Path;

use gb_03_genesis_txns::{GenesisTransactions, GenesisTxn};
use shared_types::LedgerId;
use tracing::info;

use crate::domain::{LedgerSummary, WriteMode};
use crate::error::LedgerError;
use crate::ports::{LedgerHandle, LedgerStore};

/// Genesis ledger writer over a ledger store.
pub struct GenesisLedgerWriter<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> GenesisLedgerWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write domain then pool into `genesis_dir`.
    ///
    /// Both ledgers are filled and staged before either is committed. A
    /// failure up to the last `stage` leaves both files as they were; the
    /// handles dropped on the error path discard what they staged.
    pub fn write(
        &self,
        genesis_dir: &Path,
        txns: &GenesisTransactions,
        mode: WriteMode,
    ) -> Result<[LedgerSummary; 2], LedgerError> {
        let mut domain = self.prepare(genesis_dir, LedgerId::Domain, mode)?;
        let mut pool = self.prepare(genesis_dir, LedgerId::Pool, mode)?;

        let domain_first = fill(&mut domain, &txns.domain)?;
        let pool_first = fill(&mut pool, &txns.pool)?;

        domain.stage()?;
        pool.stage()?;
        domain.commit()?;
        pool.commit()?;

        let summaries = [
            LedgerSummary {
                ledger: LedgerId::Domain,
                added: txns.domain.len(),
                first_seq_no: domain_first,
                total: domain.len(),
            },
            LedgerSummary {
                ledger: LedgerId::Pool,
                added: txns.pool.len(),
                first_seq_no: pool_first,
                total: pool.len(),
            },
        ];
        for summary in &summaries {
            info!(
                ledger = %summary.ledger,
                added = summary.added,
                total = summary.total,
                "Genesis ledger written"
            );
        }
        Ok(summaries)
    }

    fn prepare(
        &self,
        genesis_dir: &Path,
        ledger: LedgerId,
        mode: WriteMode,
    ) -> Result<S::Handle, LedgerError> {
        let mut handle = self.store.open(genesis_dir, ledger.genesis_file_name())?;
        if mode == WriteMode::Reset {
            handle.reset()?;
        }
        Ok(handle)
    }
}

fn fill<H: LedgerHandle>(handle: &mut H, txns: &[GenesisTxn]) -> Result<Option<u64>, LedgerError> {
    let mut first = None;
    for txn in txns {
        let seq_no = handle.add(txn.clone())?;
        first.get_or_insert(seq_no);
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FileLedgerStore, InMemoryLedgerStore};
    use gb_01_role_definitions::{DefinitionGenerator, DefinitionRequest, RoleDefinitionApi};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn domain_only(trustees: usize) -> GenesisTransactions {
        let seeds: Vec<String> = (1..=trustees).map(|i| format!("{:0>32}", format!("T{}", i))).collect();
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(1, 0).with_trustee_seeds(seeds))
            .unwrap();
        GenesisTransactions {
            domain: roles
                .trustees
                .iter()
                .enumerate()
                .map(|(i, t)| GenesisTxn::nym(i as u64 + 1, t, None))
                .collect(),
            pool: Vec::new(),
        }
    }

    #[test]
    fn test_reset_mode_numbers_from_one() {
        let store = InMemoryLedgerStore::new();
        let writer = GenesisLedgerWriter::new(store.clone());
        let dir = PathBuf::from("/genesis");

        writer.write(&dir, &domain_only(2), WriteMode::Reset).unwrap();
        let [domain, pool] = writer.write(&dir, &domain_only(2), WriteMode::Reset).unwrap();

        assert_eq!(domain.first_seq_no, Some(1));
        assert_eq!(domain.total, 2);
        assert_eq!(pool.added, 0);
        assert_eq!(pool.first_seq_no, None);
        assert_eq!(store.ledger_count(), 2);
    }

    #[test]
    fn test_append_mode_continues_tail() {
        let store = InMemoryLedgerStore::new();
        let writer = GenesisLedgerWriter::new(store.clone());
        let dir = PathBuf::from("/genesis");

        writer.write(&dir, &domain_only(3), WriteMode::Reset).unwrap();
        let [domain, _] = writer.write(&dir, &domain_only(2), WriteMode::Append).unwrap();

        assert_eq!(domain.first_seq_no, Some(4));
        assert_eq!(domain.total, 5);
        let stored = store
            .committed(&dir, LedgerId::Domain.genesis_file_name())
            .unwrap();
        let seq: Vec<u64> = stored.iter().map(GenesisTxn::seq_no).collect();
        assert_eq!(seq, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failed_pool_stage_keeps_domain_unchanged() {
        let dir = TempDir::new().unwrap();
        let genesis = dir.path().join("sandbox");
        let writer = GenesisLedgerWriter::new(FileLedgerStore::new());
        writer.write(&genesis, &domain_only(1), WriteMode::Reset).unwrap();

        let domain_path = genesis.join("domain_transactions_genesis");
        let before = fs::read_to_string(&domain_path).unwrap();
        fs::create_dir(genesis.join("pool_transactions_genesis.tmp")).unwrap();

        let result = writer.write(&genesis, &domain_only(1), WriteMode::Append);

        assert!(matches!(result, Err(LedgerError::Io { .. })));
        assert_eq!(fs::read_to_string(&domain_path).unwrap(), before);
        assert!(!genesis.join("domain_transactions_genesis.tmp").exists());
    }

    #[test]
    fn test_failed_stage_commits_neither_ledger() {
        let store = InMemoryLedgerStore::new();
        let writer = GenesisLedgerWriter::new(store.clone());
        let dir = PathBuf::from("/genesis");
        writer.write(&dir, &domain_only(2), WriteMode::Reset).unwrap();

        store.fail_next_stage(&dir, LedgerId::Pool.genesis_file_name());
        assert!(writer.write(&dir, &domain_only(2), WriteMode::Append).is_err());

        let domain = store
            .committed(&dir, LedgerId::Domain.genesis_file_name())
            .unwrap();
        assert_eq!(domain.len(), 2);
    }

    #[test]
    fn test_files_land_in_genesis_dir() {
        let dir = TempDir::new().unwrap();
        let genesis = dir.path().join("sandbox");

        GenesisLedgerWriter::new(FileLedgerStore::new())
            .write(&genesis, &domain_only(1), WriteMode::Reset)
            .unwrap();

        assert!(genesis.join("domain_transactions_genesis").is_file());
        assert!(genesis.join("pool_transactions_genesis").is_file());
    }
}
