//! Ports Layer

pub mod inbound;
pub mod outbound;

pub use inbound::KeyMaterializerApi;
pub use outbound::{LocalKeyStore, NodeParamsSink, StoredKeys};
