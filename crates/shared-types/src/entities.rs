//! # Core Identity Entities
//!
//! ## Clusters
//!
//! - **Identity**: `Did`, `Verkey`
//! - **Node keys**: `BlsKey`, `BlsProofOfPossession`
//! - **Classification**: `Role`, `LedgerId`

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Public identifier of a participant (base58 of the first 16 verkey bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(String);

impl Did {
    /// Wrap an already-encoded identifier.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The base58 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ed25519 verification key in base58.
///
/// Either the full 32-byte key or its abbreviated `~` form, depending on
/// which constructor produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verkey(String);

impl Verkey {
    /// Wrap an already-encoded key.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The base58 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `~`-prefixed abbreviated form.
    pub fn is_abbreviated(&self) -> bool {
        self.0.starts_with('~')
    }
}

impl fmt::Display for Verkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CLUSTER B: NODE KEYS
// =============================================================================

/// BLS public key of a node, base58.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlsKey(String);

impl BlsKey {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Proof of possession for a `BlsKey`, base58.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlsProofOfPossession(String);

impl BlsProofOfPossession {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// CLUSTER C: CLASSIFICATION
// =============================================================================

/// Participant role class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Trustee,
    Steward,
    Node,
    Client,
}

impl Role {
    /// Name prefix used both for aliases and for synthesized seeds
    /// (`Steward3` is steward slot 3).
    pub fn template(&self) -> &'static str {
        match self {
            Role::Trustee => "Trustee",
            Role::Steward => "Steward",
            Role::Node => "Node",
            Role::Client => "Client",
        }
    }

    /// Alias of the participant in slot `index` (1-based).
    pub fn alias(&self, index: usize) -> String {
        format!("{}{}", self.template(), index)
    }

    /// Code written into a role grant, `None` for participants without an
    /// elevated role.
    pub fn ledger_code(&self) -> Option<&'static str> {
        match self {
            Role::Trustee => Some("0"),
            Role::Steward => Some("2"),
            Role::Node | Role::Client => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// The two genesis ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerId {
    /// Identity and role grants.
    Domain,
    /// Node registrations.
    Pool,
}

impl LedgerId {
    /// File name of this ledger's genesis log inside the genesis directory.
    pub fn genesis_file_name(&self) -> &'static str {
        match self {
            LedgerId::Domain => "domain_transactions_genesis",
            LedgerId::Pool => "pool_transactions_genesis",
        }
    }
}

impl fmt::Display for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerId::Domain => f.write_str("domain"),
            LedgerId::Pool => f.write_str("pool"),
        }
    }
}
