//! Local Key Materializer
//!
//! Generates and persists private keys for the nodes this machine runs, and
//! derives the public registration data for everyone else.

use gb_01_role_definitions::NodeDefinition;
use shared_crypto::derive_bls_key_pair;
use tracing::{debug, info};

use crate::domain::{NodeKeyPlan, NodeKeys, NodeParams, CLIENT_CONNECTIONS_LIMIT};
use crate::error::KeyMaterialError;
use crate::ports::{KeyMaterializerApi, LocalKeyStore, NodeParamsSink};

/// Key materialization service over a key store and a params sink.
pub struct LocalKeyMaterializer<S: LocalKeyStore, P: NodeParamsSink> {
    store: S,
    params: P,
    client_connections_limit: u32,
}

impl<S: LocalKeyStore, P: NodeParamsSink> LocalKeyMaterializer<S, P> {
    pub fn new(store: S, params: P) -> Self {
        Self {
            store,
            params,
            client_connections_limit: CLIENT_CONNECTIONS_LIMIT,
        }
    }

    pub fn with_client_connections_limit(mut self, limit: u32) -> Self {
        self.client_connections_limit = limit;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn params_sink(&self) -> &P {
        &self.params
    }

    fn materialize_local(&self, node: &NodeDefinition) -> Result<NodeKeys, KeyMaterialError> {
        let name = node.name();
        let expected = node.verkey();

        if let Some(existing) = self.store.stored_verkey(name)? {
            if &existing != expected {
                return Err(KeyMaterialError::KeyConsistency {
                    node: name.to_string(),
                    expected: expected.clone(),
                    actual: existing,
                });
            }
            debug!(node = name, "Existing keys match seed, regenerating in place");
        }

        let stored = self.store.generate_and_store(name, node.seed().as_bytes())?;
        if &stored.verkey != expected {
            return Err(KeyMaterialError::KeyConsistency {
                node: name.to_string(),
                expected: expected.clone(),
                actual: stored.verkey,
            });
        }

        if let Some(params) = NodeParams::for_node(node, self.client_connections_limit) {
            self.params.write_params(&params)?;
        }

        info!(node = name, verkey = %stored.verkey, "Materialized local node keys");

        Ok(NodeKeys {
            index: node.index(),
            verkey: stored.verkey,
            bls: stored.bls,
            local: true,
        })
    }

    fn materialize_remote(&self, node: &NodeDefinition) -> Result<NodeKeys, KeyMaterialError> {
        let bls = derive_bls_key_pair(node.seed().as_bytes()).map_err(|source| {
            KeyMaterialError::KeyDerivation {
                node: node.name().to_string(),
                source,
            }
        })?;

        debug!(node = node.name(), "Derived remote node keys");

        Ok(NodeKeys {
            index: node.index(),
            verkey: node.verkey().clone(),
            bls,
            local: false,
        })
    }
}

impl<S: LocalKeyStore, P: NodeParamsSink> KeyMaterializerApi for LocalKeyMaterializer<S, P> {
    fn materialize(
        &self,
        node: &NodeDefinition,
        plan: &NodeKeyPlan,
    ) -> Result<NodeKeys, KeyMaterialError> {
        match plan {
            NodeKeyPlan::Local { .. } => self.materialize_local(node),
            NodeKeyPlan::Remote { .. } => self.materialize_remote(node),
        }
    }
}
