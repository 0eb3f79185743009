//! In-memory key store and params sink.

use std::collections::HashMap;
use std::sync::RwLock;

use shared_crypto::{derive_bls_key_pair, derive_identity};
use shared_types::Verkey;

use crate::domain::NodeParams;
use crate::error::KeyStoreError;
use crate::ports::{LocalKeyStore, NodeParamsSink, StoredKeys};

/// Key store that keeps only the public half, keyed by node name.
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    entries: RwLock<HashMap<String, StoredKeys>>,
    corrupt_on_store: RwLock<Option<Verkey>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `node_name` with a verkey, as if left by an earlier run.
    pub fn seed_entry(&self, node_name: &str, keys: StoredKeys) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(node_name.to_string(), keys);
        }
    }

    /// Make the next `generate_and_store` report `verkey` instead of the
    /// derived one.
    pub fn corrupt_next_store(&self, verkey: Verkey) {
        if let Ok(mut slot) = self.corrupt_on_store.write() {
            *slot = Some(verkey);
        }
    }

    pub fn contains(&self, node_name: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(node_name))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LocalKeyStore for InMemoryKeyStore {
    fn stored_verkey(&self, node_name: &str) -> Result<Option<Verkey>, KeyStoreError> {
        let entries = self.entries.read().map_err(|_| poisoned("key entries"))?;
        Ok(entries.get(node_name).map(|keys| keys.verkey.clone()))
    }

    fn generate_and_store(
        &self,
        node_name: &str,
        seed: &[u8],
    ) -> Result<StoredKeys, KeyStoreError> {
        let identity = derive_identity(seed)?;
        let bls = derive_bls_key_pair(seed)?;

        let override_verkey = self
            .corrupt_on_store
            .write()
            .map_err(|_| poisoned("corruption slot"))?
            .take();
        let keys = StoredKeys {
            verkey: override_verkey.unwrap_or(identity.verkey),
            bls,
        };

        self.entries
            .write()
            .map_err(|_| poisoned("key entries"))?
            .insert(node_name.to_string(), keys.clone());
        Ok(keys)
    }
}

/// Collects node parameters instead of writing files.
#[derive(Debug, Default)]
pub struct InMemoryParamsSink {
    written: RwLock<Vec<NodeParams>>,
}

impl InMemoryParamsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<NodeParams> {
        self.written
            .read()
            .map(|written| written.clone())
            .unwrap_or_default()
    }
}

impl NodeParamsSink for InMemoryParamsSink {
    fn write_params(&self, params: &NodeParams) -> Result<(), KeyStoreError> {
        self.written
            .write()
            .map_err(|_| poisoned("params"))?
            .push(params.clone());
        Ok(())
    }
}

fn poisoned(what: &'static str) -> KeyStoreError {
    KeyStoreError::Poisoned { what }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn poison<T: Send + Sync + 'static>(lock: Arc<RwLock<T>>) {
        let _ = thread::spawn(move || {
            let _guard = lock.write().unwrap();
            panic!("poison");
        })
        .join();
    }

    #[test]
    fn test_poisoned_key_store_rejects_store() {
        let store = Arc::new(InMemoryKeyStore::new());
        let shared = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = shared.entries.write().unwrap();
            panic!("poison");
        })
        .join();

        let seed = [b'0'; 32];
        assert!(matches!(
            store.generate_and_store("Node1", &seed),
            Err(KeyStoreError::Poisoned { .. })
        ));
        assert!(matches!(
            store.stored_verkey("Node1"),
            Err(KeyStoreError::Poisoned { .. })
        ));
    }

    #[test]
    fn test_poisoned_params_sink_rejects_write() {
        let written = Arc::new(RwLock::new(Vec::new()));
        poison(Arc::clone(&written));
        let sink = InMemoryParamsSink {
            written: Arc::try_unwrap(written).unwrap(),
        };

        let params = NodeParams {
            node_name: "Node1".to_string(),
            node_ip: "0.0.0.0".to_string(),
            node_port: 9701,
            client_ip: "0.0.0.0".to_string(),
            client_port: 9702,
            client_connections_limit: 500,
        };
        assert!(matches!(
            sink.write_params(&params),
            Err(KeyStoreError::Poisoned { .. })
        ));
    }
}
