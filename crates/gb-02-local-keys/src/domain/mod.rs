//! Domain Layer - key plans and their results
//!
//! RULES:
//! - No I/O operations

pub mod node_keys;
pub mod node_params;
pub mod plan;

pub use node_keys::NodeKeys;
pub use node_params::{NodeParams, CLIENT_CONNECTIONS_LIMIT};
pub use plan::{resolve_plans, validate_local_indices, NodeKeyPlan};
