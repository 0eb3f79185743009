//! Public key material of one node, ready for its pool registration.

use shared_crypto::BlsKeyMaterial;
use shared_types::Verkey;

/// Keys registered for a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeKeys {
    /// 1-based node slot.
    pub index: usize,
    pub verkey: Verkey,
    pub bls: BlsKeyMaterial,
    /// Private material was written on this machine.
    pub local: bool,
}
