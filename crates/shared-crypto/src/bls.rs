//! BLS12-381 Node Keys
//!
//! Every node in the pool registers a BLS public key together with a proof
//! of possession (a signature over the key itself), so that multi-signatures
//! over ledger state can later be aggregated without rogue-key attacks.
//!
//! Keys are derived with `key_gen` using the node seed as input keying
//! material: every machine computes the same BLS key for a given node, which
//! is why remote nodes can be registered without their private material.

use blst::min_pk::{PublicKey, SecretKey, Signature};
use blst::BLST_ERROR;
use shared_types::{BlsKey, BlsProofOfPossession};

use crate::{seed_array, CryptoError};

/// Domain separation tag for proof-of-possession signatures
const POP_DST: &[u8] = b"BLS_POP_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// BLS public key (48 bytes compressed)
#[derive(Clone, Debug)]
pub struct BlsPublicKey(PublicKey);

impl PartialEq for BlsPublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for BlsPublicKey {}

/// BLS signature (96 bytes)
#[derive(Clone, Debug)]
pub struct BlsSignature(Signature);

impl PartialEq for BlsSignature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for BlsSignature {}

/// BLS key pair for a node
pub struct BlsKeyPair {
    secret: SecretKey,
    public: BlsPublicKey,
}

impl BlsKeyPair {
    /// Derive a key pair from a 32-byte seed
    pub fn from_seed(seed: &[u8]) -> Result<Self, CryptoError> {
        let ikm = seed_array(seed)?;
        let secret = SecretKey::key_gen(&ikm, &[])
            .map_err(|e| CryptoError::KeyGenerationFailed(format!("{:?}", e)))?;
        let public = BlsPublicKey(secret.sk_to_pk());
        Ok(Self { secret, public })
    }

    /// Get the public key
    pub fn public_key(&self) -> BlsPublicKey {
        self.public.clone()
    }

    /// Sign the compressed public key under the PoP domain tag
    pub fn proof_of_possession(&self) -> BlsSignature {
        BlsSignature(self.secret.sign(&self.public.to_bytes(), POP_DST, &[]))
    }

    /// Get the secret key bytes (only ever written to the local key store)
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret.to_bytes()
    }
}

impl BlsPublicKey {
    /// Check a proof of possession against this key
    pub fn verify_pop(&self, pop: &BlsSignature) -> bool {
        pop.0
            .verify(true, &self.to_bytes(), POP_DST, &[], &self.0, true)
            == BLST_ERROR::BLST_SUCCESS
    }

    /// Serialize to 48-byte compressed form
    pub fn to_bytes(&self) -> [u8; 48] {
        self.0.to_bytes()
    }

    /// Parse from the base58 ledger form
    pub fn from_base58(key: &BlsKey) -> Result<Self, CryptoError> {
        let raw = bs58::decode(key.as_str())
            .into_vec()
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        PublicKey::from_bytes(&raw)
            .map(BlsPublicKey)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Base58 form written to the pool ledger
    pub fn to_base58(&self) -> BlsKey {
        BlsKey::new(bs58::encode(self.to_bytes()).into_string())
    }
}

impl BlsSignature {
    /// Serialize to 96-byte form
    pub fn to_bytes(&self) -> [u8; 96] {
        self.0.to_bytes()
    }

    /// Parse from the base58 ledger form
    pub fn from_base58(pop: &BlsProofOfPossession) -> Result<Self, CryptoError> {
        let raw = bs58::decode(pop.as_str())
            .into_vec()
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        Signature::from_bytes(&raw)
            .map(BlsSignature)
            .map_err(|_| CryptoError::InvalidProofOfPossession)
    }

    /// Base58 form written to the pool ledger
    pub fn to_base58(&self) -> BlsProofOfPossession {
        BlsProofOfPossession::new(bs58::encode(self.to_bytes()).into_string())
    }
}

/// Public BLS material registered for a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsKeyMaterial {
    /// Base58 public key.
    pub key: BlsKey,
    /// Base58 proof of possession.
    pub pop: BlsProofOfPossession,
}

/// Derive a node's BLS key and proof of possession from its seed.
pub fn derive_bls_key_pair(seed: &[u8]) -> Result<BlsKeyMaterial, CryptoError> {
    let pair = BlsKeyPair::from_seed(seed)?;
    Ok(BlsKeyMaterial {
        key: pair.public_key().to_base58(),
        pop: pair.proof_of_possession().to_base58(),
    })
}

/// Check that base58 PoP material belongs to the base58 key.
pub fn verify_key_material(material: &BlsKeyMaterial) -> Result<(), CryptoError> {
    let key = BlsPublicKey::from_base58(&material.key)?;
    let pop = BlsSignature::from_base58(&material.pop)?;
    if key.verify_pop(&pop) {
        Ok(())
    } else {
        Err(CryptoError::InvalidProofOfPossession)
    }
}
