//! Seed normalization and reconciliation
//!
//! A seed is either supplied by the operator (exactly 32 characters) or
//! synthesized from the role template and slot index (`Steward3`), left-padded
//! with `'0'` to 32 characters. Both end up as a `NormalizedSeed`.

use std::fmt;

use shared_types::{Role, SEED_LEN, SEED_PAD_CHAR};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{DefinitionError, SeedError};

/// A seed padded to its final 32-character form.
///
/// Holds secret material for explicitly supplied seeds, so it is wiped on
/// drop and never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NormalizedSeed(String);

impl NormalizedSeed {
    /// Operator-supplied seed: must already be exactly 32 characters.
    pub fn explicit(raw: &str) -> Result<Self, SeedError> {
        let len = raw.chars().count();
        if len != SEED_LEN {
            return Err(SeedError::WrongLength {
                len,
                expected: SEED_LEN,
            });
        }
        normalize(raw)
    }

    /// Seed for slot `index` of `role` when none was supplied.
    pub fn synthesized(role: Role, index: usize) -> Result<Self, SeedError> {
        normalize(&role.alias(index))
    }

    /// Raw bytes handed to key derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Padded seed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NormalizedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NormalizedSeed(<redacted>)")
    }
}

/// Left-pad `raw` with `'0'` to 32 characters.
///
/// Padding counts characters, not bytes. A seed with multi-byte characters
/// therefore normalizes fine but is rejected later by key derivation.
pub fn normalize(raw: &str) -> Result<NormalizedSeed, SeedError> {
    let len = raw.chars().count();
    if len > SEED_LEN {
        return Err(SeedError::TooLong { len, max: SEED_LEN });
    }

    let mut padded = String::with_capacity(SEED_LEN);
    padded.extend(std::iter::repeat(SEED_PAD_CHAR).take(SEED_LEN - len));
    padded.push_str(raw);
    Ok(NormalizedSeed(padded))
}

/// Reconcile an optional seed list against `slots`.
///
/// - no list: synthesize `<Role><i>` for every slot
/// - longer list: keep the first `slots` entries
/// - shorter list: keep the supplied prefix, synthesize the rest continuing
///   from the first unfilled index
pub fn reconcile_seeds(
    supplied: Option<&[String]>,
    slots: usize,
    role: Role,
) -> Result<Vec<NormalizedSeed>, DefinitionError> {
    let supplied = supplied.unwrap_or(&[]);
    if supplied.len() > slots {
        debug!(
            role = %role,
            supplied = supplied.len(),
            slots,
            "Ignoring surplus seeds"
        );
    }

    let mut seeds = Vec::with_capacity(slots);
    for (offset, raw) in supplied.iter().take(slots).enumerate() {
        let seed = NormalizedSeed::explicit(raw).map_err(|source| DefinitionError::InvalidSeed {
            role,
            index: offset + 1,
            source,
        })?;
        seeds.push(seed);
    }

    for index in seeds.len() + 1..=slots {
        let seed = NormalizedSeed::synthesized(role, index)
            .map_err(|source| DefinitionError::InvalidSeed { role, index, source })?;
        seeds.push(seed);
    }

    Ok(seeds)
}
