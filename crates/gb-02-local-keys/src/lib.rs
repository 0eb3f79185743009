//! # GB-02 Local Keys
//!
//! Decides, per node, whether this machine owns the node's private keys.
//!
//! - **Local** nodes (listed in `--nodeNum`): the Ed25519 and BLS key pairs are
//!   generated from the node seed and written to the local key store. If the
//!   node is not on loopback, a node-parameters file is written next to the
//!   keys so the node process binds on all interfaces.
//! - **Remote** nodes: nothing is written. The seed-derived verkey and the
//!   seed-derived BLS key are enough to register the node in the pool ledger.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - `NodeKeyPlan`, `NodeKeys`, `NodeParams`
//! - `ports/` - `KeyMaterializerApi` (inbound), `LocalKeyStore`,
//!   `NodeParamsSink` (outbound)
//! - `service/` - `LocalKeyMaterializer`
//! - `adapters/` - file-backed and in-memory stores
//!
//! ## Invariants
//!
//! - The verkey returned for a local node equals the verkey derivable from
//!   its seed; any divergence is `KeyConsistency` and aborts the run.
//! - A key store entry holding a different key is never overwritten.
//! - Private material never leaves this crate's adapters.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{FileKeyStore, FileNodeParamsWriter, InMemoryKeyStore, InMemoryParamsSink};
pub use domain::{
    resolve_plans, validate_local_indices, NodeKeyPlan, NodeKeys, NodeParams,
    CLIENT_CONNECTIONS_LIMIT,
};
pub use error::{KeyMaterialError, KeyStoreError};
pub use ports::{KeyMaterializerApi, LocalKeyStore, NodeParamsSink, StoredKeys};
pub use service::LocalKeyMaterializer;
