//! Write policy and tail parsing.

use serde_json::Value;
use shared_types::LedgerId;

/// What to do with an existing genesis file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Discard existing content.
    #[default]
    Reset,
    /// Keep existing content, continue its numbering.
    Append,
}

impl WriteMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::Reset
        }
    }
}

/// What one ledger looks like after a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub ledger: LedgerId,
    /// Entries added by this run.
    pub added: usize,
    /// `seqNo` of the first entry added, if any.
    pub first_seq_no: Option<u64>,
    /// Entries on file after the write.
    pub total: usize,
}

/// `txnMetadata.seqNo` of a stored line.
///
/// Parsed loosely so lines written by other tools with extra fields still
/// count.
pub fn tail_seq_no(line: &str) -> Result<u64, String> {
    let value: Value = serde_json::from_str(line).map_err(|e| e.to_string())?;
    value
        .pointer("/txnMetadata/seqNo")
        .and_then(Value::as_u64)
        .ok_or_else(|| "missing txnMetadata.seqNo".to_string())
}
