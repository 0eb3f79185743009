//! Domain Layer

pub mod ledger;

pub use ledger::{tail_seq_no, LedgerSummary, WriteMode};
