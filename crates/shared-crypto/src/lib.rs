//! # Shared Crypto - Seed-Deterministic Key Derivation
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Participant identifier + verification key |
//! | `bls` | BLS12-381 (min-pk) | Node BLS key + proof of possession |
//!
//! ## Determinism
//!
//! Every function here is a pure function of a 32-byte seed. Two machines
//! given the same seed produce the same identifier, verkey, BLS key and
//! proof of possession, byte for byte. There is no RNG anywhere in this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bls;
pub mod errors;
pub mod signatures;

// Re-exports
pub use bls::{
    derive_bls_key_pair, verify_key_material, BlsKeyMaterial, BlsKeyPair, BlsPublicKey,
    BlsSignature,
};
pub use errors::CryptoError;
pub use signatures::{derive_identity, DerivedIdentity, Ed25519KeyPair, Ed25519PublicKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check that `seed` has the exact length every derivation requires.
pub(crate) fn seed_array(seed: &[u8]) -> Result<[u8; shared_types::SEED_LEN], CryptoError> {
    seed.try_into().map_err(|_| CryptoError::InvalidSeedLength {
        expected: shared_types::SEED_LEN,
        actual: seed.len(),
    })
}
