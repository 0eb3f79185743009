//! Error types for role definition

use shared_crypto::CryptoError;
use shared_types::Role;
use thiserror::Error;

/// Errors raised while deriving the role set
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Invalid seed for {role} {index}: {source}")]
    InvalidSeed {
        role: Role,
        index: usize,
        #[source]
        source: SeedError,
    },

    #[error("Invalid topology: {0}")]
    InvalidTopology(#[from] TopologyError),

    #[error("Key derivation failed for {role} {index}: {source}")]
    KeyDerivation {
        role: Role,
        index: usize,
        #[source]
        source: CryptoError,
    },
}

/// Malformed seed text. The seed itself is never part of the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed is {len} characters, at most {max} allowed")]
    TooLong { len: usize, max: usize },

    #[error("seed is {len} characters, exactly {expected} required")]
    WrongLength { len: usize, expected: usize },
}

/// Bad node count, host or port layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("node count {count} outside 1..={max}")]
    NodeCount { count: usize, max: usize },

    #[error("'{value}' (node {index}) is neither an IP literal nor a valid hostname")]
    InvalidHost { index: usize, value: String },

    #[error("base port {base} leaves no room for {nodes} nodes")]
    PortOverflow { base: u16, nodes: usize },
}
