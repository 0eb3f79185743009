//! Domain Layer - Pure derivation logic
//!
//! This layer contains:
//! - Seed normalization and seed-list reconciliation
//! - IP assignment and port layout
//! - Role definitions and the request that produces them
//!
//! RULES:
//! - No I/O operations
//! - No randomness

pub mod definitions;
pub mod request;
pub mod seed;
pub mod topology;

pub use definitions::{IdentityDefinition, NodeDefinition, RoleSet};
pub use request::DefinitionRequest;
pub use seed::{normalize, reconcile_seeds, NormalizedSeed};
pub use topology::{
    assign_ips, is_loopback, is_valid_host, port_pair, NodeEndpoint, Topology,
};
