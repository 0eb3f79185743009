//! Outbound ports: where private key material and node parameters go.

use shared_crypto::BlsKeyMaterial;
use shared_types::Verkey;

use crate::domain::NodeParams;
use crate::error::KeyStoreError;

/// Public half of what a key store just wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredKeys {
    pub verkey: Verkey,
    pub bls: BlsKeyMaterial,
}

/// Persistent store for a node's signing and BLS keys.
pub trait LocalKeyStore {
    /// Verkey already on record for `node_name`, if any.
    fn stored_verkey(&self, node_name: &str) -> Result<Option<Verkey>, KeyStoreError>;

    /// Generate both key pairs from `seed`, persist them, and return the
    /// public half as read back from the store.
    fn generate_and_store(&self, node_name: &str, seed: &[u8])
        -> Result<StoredKeys, KeyStoreError>;
}

/// Destination for node-parameters files.
pub trait NodeParamsSink {
    fn write_params(&self, params: &NodeParams) -> Result<(), KeyStoreError>;
}
