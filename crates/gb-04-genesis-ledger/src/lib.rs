//! # GB-04 Genesis Ledger
//!
//! Persists genesis transactions as JSON lines, one file per ledger.
//!
//! ## Lifecycle
//!
//! `open` → (`reset`) → `add`* → `stage` → `commit` (`stop` does both).
//! Nothing reaches the target file before `commit`: additions are buffered,
//! `stage` writes them to a temp file, and `commit` renames it over the
//! target. A handle dropped before `commit` removes its temp file, so a failed
//! run leaves no genesis file behind and an earlier file untouched.
//! `GenesisLedgerWriter` stages both ledgers before committing either.
//!
//! In append mode the existing lines are kept verbatim and numbering
//! continues from the last `seqNo` on file.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{FileLedgerHandle, FileLedgerStore, InMemoryLedgerHandle, InMemoryLedgerStore};
pub use domain::{tail_seq_no, LedgerSummary, WriteMode};
pub use error::LedgerError;
pub use ports::{LedgerHandle, LedgerStore};
pub use service::GenesisLedgerWriter;
