//! # GB-01 Role Definitions
//!
//! Derives the identity of every participant in a new pool: trustees,
//! stewards, nodes and clients, plus each node's IP and port pair.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `NormalizedSeed`, `normalize`, `reconcile_seeds`: seed handling
//!   - `assign_ips`, `port_pair`: topology
//!   - `IdentityDefinition`, `NodeDefinition`, `RoleSet`: the output
//!   - `DefinitionRequest`: validated input
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `RoleDefinitionApi`: Driving port
//!   - `IdentityDeriver`: Driven port (signature primitive)
//!
//! - **Service Layer** (`service/`): `DefinitionGenerator`
//!
//! - **Adapters Layer** (`adapters/`): `Ed25519IdentityDeriver`
//!
//! ## Invariants
//!
//! - Every derivation seed is exactly 32 bytes.
//! - `stewards.len() == nodes.len() == node_count`, `clients.len() == client_count`,
//!   `trustees.len() >= 1`.
//! - Node `i` listens on `base + 2i - 1` (nodes) and `base + 2i` (clients).
//! - Same request, same `RoleSet`, on every machine.
//!
//! ## Usage Example
//!
//! ```ignore
//! use gb_01_role_definitions::{DefinitionGenerator, DefinitionRequest, RoleDefinitionApi};
//!
//! let generator = DefinitionGenerator::default();
//! let roles = generator.generate(&DefinitionRequest::new(4, 2))?;
//! assert_eq!(roles.nodes[2].node_port, 9705);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::Ed25519IdentityDeriver;
pub use domain::{
    assign_ips, is_loopback, is_valid_host, normalize, port_pair, reconcile_seeds,
    DefinitionRequest, IdentityDefinition, NodeDefinition, NodeEndpoint, NormalizedSeed, RoleSet,
    Topology,
};
pub use error::{DefinitionError, SeedError, TopologyError};
pub use ports::{IdentityDeriver, RoleDefinitionApi};
pub use service::DefinitionGenerator;
