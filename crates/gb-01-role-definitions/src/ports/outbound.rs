//! Outbound Ports (Driven Ports)
//!
//! The signature primitive is consumed as an opaque capability so tests can
//! count or fail derivations without touching real curves.

use shared_crypto::{CryptoError, DerivedIdentity};

/// Seed to public identity (Driven Port)
///
/// Production: `Ed25519IdentityDeriver` (adapters/)
pub trait IdentityDeriver {
    /// Derive identifier and verkey from a 32-byte seed.
    ///
    /// Must be a pure function of `seed`.
    fn derive(&self, seed: &[u8]) -> Result<DerivedIdentity, CryptoError>;
}
