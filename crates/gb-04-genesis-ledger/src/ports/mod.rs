//! Ports Layer

pub mod outbound;

pub use outbound::{LedgerHandle, LedgerStore};
