//! Adapters Layer
//!
//! - `file`: JSON-lines files, atomic replace on stop
//! - `memory`: shared in-memory map for tests

pub mod file;
pub mod memory;

pub use file::{FileLedgerHandle, FileLedgerStore};
pub use memory::{InMemoryLedgerHandle, InMemoryLedgerStore};
