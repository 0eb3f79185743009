//! Crypto error types.

use thiserror::Error;

/// Cryptographic derivation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Seed is not exactly the derivation length
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength {
        /// Expected seed length in bytes
        expected: usize,
        /// Actual seed length in bytes
        actual: usize,
    },

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid base58 text
    #[error("Invalid base58 encoding: {0}")]
    InvalidEncoding(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Proof of possession did not verify against its key
    #[error("BLS proof of possession does not match key")]
    InvalidProofOfPossession,
}
