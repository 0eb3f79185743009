//! # Shared Types Crate
//!
//! Value types passed between the bootstrap stages: participant identifiers,
//! verification keys, BLS key material, role codes and ledger ids.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every stage speaks in these types, so a
//!   `Did` produced by role derivation is the same `Did` written to the ledger.
//! - **Stable Encoding**: all key types hold their base58 text form, which is
//!   exactly what appears in the genesis files. Nothing is re-encoded later.

pub mod entities;

pub use entities::*;

/// Length in bytes (and characters, for ASCII seeds) of every derivation seed.
pub const SEED_LEN: usize = 32;

/// Fill character used to left-pad short seeds.
pub const SEED_PAD_CHAR: char = '0';

/// Address every node binds to when no IP is supplied for its slot.
pub const LOOPBACK_IP: &str = "127.0.0.1";

/// Address a non-loopback node binds to.
pub const BIND_ALL_IP: &str = "0.0.0.0";

/// Default first port; node `i` listens on `base + 2i - 1` and `base + 2i`.
pub const DEFAULT_BASE_PORT: u16 = 9700;

/// Upper bound on the pool size accepted by the bootstrap.
pub const MAX_NODE_COUNT: usize = 100;

/// Default network name.
pub const DEFAULT_NETWORK: &str = "sandbox";
