//! File-backed genesis ledger.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use gb_03_genesis_txns::GenesisTxn;
use tracing::{debug, info, warn};

use crate::domain::tail_seq_no;
use crate::error::LedgerError;
use crate::ports::{LedgerHandle, LedgerStore};

/// Opens JSON-lines genesis files.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileLedgerStore;

impl FileLedgerStore {
    pub fn new() -> Self {
        Self
    }
}

impl LedgerStore for FileLedgerStore {
    type Handle = FileLedgerHandle;

    fn open(&self, directory: &Path, file_name: &str) -> Result<FileLedgerHandle, LedgerError> {
        FileLedgerHandle::load(directory.join(file_name))
    }
}

/// Buffered ledger file. `stage` writes `<file>.tmp`, `commit` renames it
/// over the target.
#[derive(Debug)]
pub struct FileLedgerHandle {
    path: PathBuf,
    lines: Vec<String>,
    last_seq_no: u64,
    temp_created: bool,
    staged: bool,
    stopped: bool,
}

impl FileLedgerHandle {
    fn load(path: PathBuf) -> Result<Self, LedgerError> {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(LedgerError::io(&path, e)),
        };

        let lines: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        let last_seq_no = match lines.last() {
            Some(line) => tail_seq_no(line).map_err(|reason| LedgerError::Corrupt {
                path: path.clone(),
                line: lines.len(),
                reason,
            })?,
            None => 0,
        };

        debug!(path = %path.display(), entries = lines.len(), last_seq_no, "Opened ledger");

        Ok(Self {
            path,
            lines,
            last_seq_no,
            temp_created: false,
            staged: false,
            stopped: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

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

    fn write_temp(&mut self, temp_path: &Path) -> Result<(), LedgerError> {
        let mut file = fs::File::create(temp_path).map_err(|e| LedgerError::io(temp_path, e))?;
        self.temp_created = true;
        for line in &self.lines {
            file.write_all(line.as_bytes())
                .and_then(|_| file.write_all(b"\n"))
                .map_err(|e| LedgerError::io(temp_path, e))?;
        }
        file.sync_all().map_err(|e| LedgerError::io(temp_path, e))
    }
}

impl LedgerHandle for FileLedgerHandle {
    fn reset(&mut self) -> Result<(), LedgerError> {
        self.ensure_open()?;
        if !self.lines.is_empty() {
            info!(path = %self.path.display(), dropped = self.lines.len(), "Resetting ledger");
        }
        self.lines.clear();
        self.last_seq_no = 0;
        Ok(())
    }

    fn add(&mut self, txn: GenesisTxn) -> Result<u64, LedgerError> {
        self.ensure_open()?;
        let seq_no = self.last_seq_no + 1;
        self.lines.push(txn.with_seq_no(seq_no).to_json_line()?);
        self.last_seq_no = seq_no;
        Ok(seq_no)
    }

    fn stage(&mut self) -> Result<(), LedgerError> {
        self.ensure_open()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        self.write_temp(&temp_path)?;
        self.staged = true;
        debug!(path = %temp_path.display(), entries = self.lines.len(), "Ledger staged");
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

        fs::rename(self.temp_path(), &self.path).map_err(|e| LedgerError::io(&self.path, e))?;
        self.stopped = true;
        info!(path = %self.path.display(), entries = self.lines.len(), "Ledger written");
        Ok(())
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn last_seq_no(&self) -> u64 {
        self.last_seq_no
    }
}

impl Drop for FileLedgerHandle {
    fn drop(&mut self) {
        if self.stopped || !self.temp_created {
            return;
        }
        let temp_path = self.temp_path();
        match fs::remove_file(&temp_path) {
            Ok(()) => debug!(path = %temp_path.display(), "Discarded staged ledger"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %temp_path.display(), error = %e, "Failed to remove temp ledger")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb_01_role_definitions::{DefinitionGenerator, DefinitionRequest, RoleDefinitionApi};
    use tempfile::TempDir;

    fn trustee_txn() -> GenesisTxn {
        let roles = DefinitionGenerator::default()
            .generate(&DefinitionRequest::new(1, 0))
            .unwrap();
        GenesisTxn::nym(1, &roles.trustees[0], None)
    }

    #[test]
    fn test_open_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        assert!(handle.is_empty());
        assert_eq!(handle.last_seq_no(), 0);
        drop(handle);
        assert!(!dir.path().join("ledger").exists());
    }

    #[test]
    fn test_nothing_written_before_stop() {
        let dir = TempDir::new().unwrap();
        let mut handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        handle.add(trustee_txn()).unwrap();
        drop(handle);

        assert!(!dir.path().join("ledger").exists());
        assert!(!dir.path().join("ledger.tmp").exists());
    }

    #[test]
    fn test_stop_writes_json_lines() {
        let dir = TempDir::new().unwrap();
        let mut handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        assert_eq!(handle.add(trustee_txn()).unwrap(), 1);
        assert_eq!(handle.add(trustee_txn()).unwrap(), 2);
        handle.stop().unwrap();

        let text = fs::read_to_string(dir.path().join("ledger")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(GenesisTxn::from_json_line(lines[1]).unwrap().seq_no(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_append_continues_numbering() {
        let dir = TempDir::new().unwrap();
        let store = FileLedgerStore::new();

        let mut first = store.open(dir.path(), "ledger").unwrap();
        first.add(trustee_txn()).unwrap();
        first.add(trustee_txn()).unwrap();
        first.stop().unwrap();

        let mut second = store.open(dir.path(), "ledger").unwrap();
        assert_eq!(second.last_seq_no(), 2);
        assert_eq!(second.add(trustee_txn()).unwrap(), 3);
        second.stop().unwrap();

        let text = fs::read_to_string(dir.path().join("ledger")).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_reset_discards_existing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ledger"),
            "{\"txnMetadata\":{\"seqNo\":9}}\n",
        )
        .unwrap();

        let mut handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        assert_eq!(handle.last_seq_no(), 9);
        handle.reset().unwrap();
        assert_eq!(handle.add(trustee_txn()).unwrap(), 1);
        handle.stop().unwrap();

        let text = fs::read_to_string(dir.path().join("ledger")).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_corrupt_tail_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ledger"), "garbage\n").unwrap();

        let result = FileLedgerStore::new().open(dir.path(), "ledger");
        assert!(matches!(result, Err(LedgerError::Corrupt { line: 1, .. })));
    }

    #[test]
    fn test_staged_ledger_discarded_on_drop() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ledger"), "").unwrap();

        let mut handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        handle.add(trustee_txn()).unwrap();
        handle.stage().unwrap();
        assert!(dir.path().join("ledger.tmp").is_file());
        assert!(matches!(
            handle.add(trustee_txn()),
            Err(LedgerError::Staged { .. })
        ));
        drop(handle);

        assert!(!dir.path().join("ledger.tmp").exists());
        assert_eq!(fs::read_to_string(dir.path().join("ledger")).unwrap(), "");
    }

    #[test]
    fn test_commit_requires_stage() {
        let dir = TempDir::new().unwrap();
        let mut handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        assert!(matches!(handle.commit(), Err(LedgerError::NotStaged { .. })));
        assert!(!dir.path().join("ledger").exists());
    }

    #[test]
    fn test_add_after_stop_rejected() {
        let dir = TempDir::new().unwrap();
        let mut handle = FileLedgerStore::new().open(dir.path(), "ledger").unwrap();
        handle.stop().unwrap();
        assert!(matches!(
            handle.add(trustee_txn()),
            Err(LedgerError::Stopped { .. })
        ));
    }
}
