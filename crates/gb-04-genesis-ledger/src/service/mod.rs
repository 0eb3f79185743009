//! Service Layer

pub mod writer;

pub use writer::GenesisLedgerWriter;
