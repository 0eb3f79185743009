//! # Ed25519 Participant Identity
//!
//! Every trustee, steward, node and client is an Ed25519 key pair whose
//! secret seed is the participant's 32-byte derivation seed.
//!
//! ## Encoding
//!
//! - verkey: base58 of the 32-byte public key
//! - DID: base58 of the first 16 bytes of the public key
//! - abbreviated verkey: `~` + base58 of the last 16 bytes, so that
//!   `DID + abbreviated verkey` carries the full key

use ed25519_dalek::{SigningKey, VerifyingKey};
use shared_types::{Did, Verkey};
use zeroize::Zeroize;

use crate::{seed_array, CryptoError};

/// Bytes of the public key that form the DID.
const DID_LEN: usize = 16;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        // Validate it's a valid point
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Parse the full (non-abbreviated) base58 verkey form.
    pub fn from_verkey(verkey: &Verkey) -> Result<Self, CryptoError> {
        let raw = bs58::decode(verkey.as_str())
            .into_vec()
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        let bytes: [u8; 32] = raw
            .as_slice()
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full verkey, base58.
    pub fn verkey(&self) -> Verkey {
        Verkey::new(bs58::encode(self.0).into_string())
    }

    /// Identifier derived from the first half of the key.
    pub fn did(&self) -> Did {
        Did::new(bs58::encode(&self.0[..DID_LEN]).into_string())
    }

    /// `~`-prefixed second half of the key.
    pub fn abbreviated_verkey(&self) -> Verkey {
        Verkey::new(format!("~{}", bs58::encode(&self.0[DID_LEN..]).into_string()))
    }
}

/// Ed25519 keypair. The signing key wipes itself on drop.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Create from secret seed (must be 32 bytes).
    pub fn from_seed(seed: &[u8]) -> Result<Self, CryptoError> {
        let mut bytes = seed_array(seed)?;
        let signing_key = SigningKey::from_bytes(&bytes);
        bytes.zeroize();
        Ok(Self { signing_key })
    }

    /// Get public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        let verifying_key = self.signing_key.verifying_key();
        Ed25519PublicKey(verifying_key.to_bytes())
    }

    /// Get secret seed (for the local key store).
    pub fn to_seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

/// Public identity of one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedIdentity {
    /// Participant identifier.
    pub did: Did,
    /// Full verification key.
    pub verkey: Verkey,
    /// Abbreviated verification key, relative to `did`.
    pub abbreviated_verkey: Verkey,
}

/// Derive identifier and verkey from a 32-byte seed.
pub fn derive_identity(seed: &[u8]) -> Result<DerivedIdentity, CryptoError> {
    let public = Ed25519KeyPair::from_seed(seed)?.public_key();
    Ok(DerivedIdentity {
        did: public.did(),
        verkey: public.verkey(),
        abbreviated_verkey: public.abbreviated_verkey(),
    })
}
