//! Error types for genesis ledger persistence

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from ledger stores and handles
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt ledger {path} at line {line}: {reason}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Failed to serialize transaction: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Ledger {path} already stopped")]
    Stopped { path: PathBuf },

    #[error("Ledger {path} already staged for commit")]
    Staged { path: PathBuf },

    #[error("Ledger {path} committed before staging")]
    NotStaged { path: PathBuf },

    #[error("Ledger store state poisoned at {path}")]
    Poisoned { path: PathBuf },
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LedgerError::Io {
            path: path.into(),
            source,
        }
    }
}
