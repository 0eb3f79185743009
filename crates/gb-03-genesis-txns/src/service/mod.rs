//! Service Layer

pub mod builder;

pub use builder::GenesisTransactionBuilder;
