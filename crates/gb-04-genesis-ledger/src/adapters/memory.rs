//! In-memory genesis ledger.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use gb_03_genesis_txns::GenesisTxn;

use crate::error::LedgerError;
use crate::ports::{LedgerHandle, LedgerStore};

type Committed = Arc<RwLock<HashMap<PathBuf, Vec<GenesisTxn>>>>;

/// Ledger store whose "files" live in a shared map. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedgerStore {
    committed: Committed,
    fail_stage: Arc<RwLock<Option<PathBuf>>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries stopped at `directory/file_name`, if that ledger was ever stopped.
    pub fn committed(&self, directory: &Path, file_name: &str) -> Option<Vec<GenesisTxn>> {
        self.committed
            .read()
            .ok()
            .and_then(|map| map.get(&directory.join(file_name)).cloned())
    }

    pub fn ledger_count(&self) -> usize {
        self.committed.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Make the next `stage` of `directory/file_name` fail with an I/O error.
    pub fn fail_next_stage(&self, directory: &Path, file_name: &str) {
        if let Ok(mut slot) = self.fail_stage.write() {
            *slot = Some(directory.join(file_name));
        }
    }
}

impl LedgerStore for InMemoryLedgerStore {
    type Handle = InMemoryLedgerHandle;

    fn open(&self, directory: &Path, file_name: &str) -> Result<InMemoryLedgerHandle, LedgerError> {
        let path = directory.join(file_name);
        let entries = self
            .committed
            .read()
            .ok()
            .and_then(|map| map.get(&path).cloned())
            .unwrap_or_default();
        Ok(InMemoryLedgerHandle {
            committed: Arc::clone(&self.committed),
            fail_stage: Arc::clone(&self.fail_stage),
            path,
            entries,
            staged: false,
            stopped: false,
        })
    }
}

#[derive(Debug)]
pub struct InMemoryLedgerHandle {
    committed: Committed,
    fail_stage: Arc<RwLock<Option<PathBuf>>>,
    path: PathBuf,
    entries: Vec<GenesisTxn>,
    staged: bool,
    stopped: bool,
}

impl InMemoryLedgerHandle {
    fn ensure_open(&self) -> Result<(), LedgerError> {
        if self.stopped {
            return Err(LedgerError::Stopped {
                path: self.path.clone(),
            });
        }
        if self.staged {
            return Err(LedgerError::Staged {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    fn poisoned(&self) -> LedgerError {
        LedgerError::Poisoned {
            path: self.path.clone(),
        }
    }
}

impl LedgerHandle for InMemoryLedgerHandle {
    fn reset(&mut self) -> Result<(), LedgerError> {
        self.ensure_open()?;
        self.entries.clear();
        Ok(())
    }

    fn add(&mut self, txn: GenesisTxn) -> Result<u64, LedgerError> {
        self.ensure_open()?;
        let seq_no = self.last_seq_no() + 1;
        self.entries.push(txn.with_seq_no(seq_no));
        Ok(seq_no)
    }

    fn stage(&mut self) -> Result<(), LedgerError> {
        self.ensure_open()?;
        let mut slot = self.fail_stage.write().map_err(|_| self.poisoned())?;
        if slot.as_ref() == Some(&self.path) {
            *slot = None;
            return Err(LedgerError::io(
                &self.path,
                io::Error::new(io::ErrorKind::Other, "injected stage failure"),
            ));
        }
        drop(slot);
        self.staged = true;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), LedgerError> {
        if self.stopped {
            return Err(LedgerError::Stopped {
                path: self.path.clone(),
            });
        }
        if !self.staged {
            return Err(LedgerError::NotStaged {
                path: self.path.clone(),
            });
        }
        let mut map = self.committed.write().map_err(|_| self.poisoned())?;
        map.insert(self.path.clone(), self.entries.clone());
        drop(map);
        self.stopped = true;
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn last_seq_no(&self) -> u64 {
        self.entries.last().map(GenesisTxn::seq_no).unwrap_or(0)
    }
}
