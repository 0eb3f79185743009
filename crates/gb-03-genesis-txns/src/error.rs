//! Error types for genesis transaction assembly

use shared_types::Did;
use thiserror::Error;

/// Errors raised while building genesis transactions
#[derive(Debug, Error)]
pub enum GenesisTxnError {
    #[error("Node {node} is sponsored by steward {steward}, which is not in the steward list")]
    MissingSponsor { node: String, steward: Did },

    #[error("No trustee available to grant steward and client roles")]
    MissingTrustee,

    #[error("No key material supplied for node {node}")]
    MissingNodeKeys { node: String },

    #[error("Failed to serialize transaction: {0}")]
    Serialization(#[from] serde_json::Error),
}
