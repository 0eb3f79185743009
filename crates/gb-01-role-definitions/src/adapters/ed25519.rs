//! Ed25519 implementation of the `IdentityDeriver` port.

use shared_crypto::{derive_identity, CryptoError, DerivedIdentity};

use crate::ports::IdentityDeriver;

/// Derives identities with `shared-crypto`'s Ed25519 scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519IdentityDeriver;

impl IdentityDeriver for Ed25519IdentityDeriver {
    fn derive(&self, seed: &[u8]) -> Result<DerivedIdentity, CryptoError> {
        derive_identity(seed)
    }
}
