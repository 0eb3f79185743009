//! Ports Layer
//!
//! - Driving Port (inbound): `RoleDefinitionApi`
//! - Driven Port (outbound): `IdentityDeriver`

pub mod inbound;
pub mod outbound;

pub use inbound::RoleDefinitionApi;
pub use outbound::IdentityDeriver;
