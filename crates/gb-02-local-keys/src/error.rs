//! Error types for local key materialization

use std::io;
use std::path::PathBuf;

use shared_crypto::CryptoError;
use shared_types::Verkey;
use thiserror::Error;

/// Errors raised while materializing node keys
#[derive(Debug, Error)]
pub enum KeyMaterialError {
    #[error("Local node index {index} outside 1..={node_count}")]
    LocalIndexOutOfRange { index: usize, node_count: usize },

    #[error("Key consistency violation for {node}: expected verkey {expected}, key store has {actual}")]
    KeyConsistency {
        node: String,
        expected: Verkey,
        actual: Verkey,
    },

    #[error("Key derivation failed for {node}: {source}")]
    KeyDerivation {
        node: String,
        #[source]
        source: CryptoError,
    },

    #[error("Key store error: {0}")]
    KeyStore(#[from] KeyStoreError),
}

/// Errors from key store and node-parameters adapters
#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt key file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Key generation failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Store state poisoned: {what}")]
    Poisoned { what: &'static str },
}

impl KeyStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        KeyStoreError::Io {
            path: path.into(),
            source,
        }
    }
}
