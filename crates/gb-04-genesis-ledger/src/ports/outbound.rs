//! Ledger storage ports.

use std::path::Path;

use gb_03_genesis_txns::GenesisTxn;

use crate::error::LedgerError;

/// Opens genesis ledgers.
pub trait LedgerStore {
    type Handle: LedgerHandle;

    /// Open `<directory>/<file_name>`, loading existing content if present.
    /// Opening never creates the file.
    fn open(&self, directory: &Path, file_name: &str) -> Result<Self::Handle, LedgerError>;
}

/// One open genesis ledger.
pub trait LedgerHandle {
    /// Drop all entries, including those loaded at open.
    fn reset(&mut self) -> Result<(), LedgerError>;

    /// Append `txn` as the next entry and return the `seqNo` it was given.
    fn add(&mut self, txn: GenesisTxn) -> Result<u64, LedgerError>;

    /// Write the entries somewhere durable without replacing the ledger
    /// yet. After staging, `reset` and `add` fail.
    ///
    /// A handle dropped between `stage` and `commit` discards what it staged.
    fn stage(&mut self) -> Result<(), LedgerError>;

    /// Replace the ledger with the staged entries and close the handle.
    /// Fails with `NotStaged` unless `stage` succeeded first.
    fn commit(&mut self) -> Result<(), LedgerError>;

    /// `stage` followed by `commit`.
    fn stop(&mut self) -> Result<(), LedgerError> {
        self.stage()?;
        self.commit()
    }

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `seqNo` of the last entry, 0 when empty.
    fn last_seq_no(&self) -> u64;
}
