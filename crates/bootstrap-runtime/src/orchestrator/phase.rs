//! Bootstrap state machine.
//!
//! ```text
//! Idle → TopologyResolved → IdentitiesDerived → LocalKeysMaterialized
//!      → TransactionsBuilt → LedgersWritten → Done
//! ```
//!
//! Transitions are one-way. There is no edge back and no retry: a failed
//! step ends the run.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BootstrapPhase {
    Idle,
    TopologyResolved,
    IdentitiesDerived,
    LocalKeysMaterialized,
    TransactionsBuilt,
    LedgersWritten,
    Done,
}

impl BootstrapPhase {
    /// The only phase reachable from `self`, `None` once done.
    pub fn next(self) -> Option<Self> {
        use BootstrapPhase::*;
        match self {
            Idle => Some(TopologyResolved),
            TopologyResolved => Some(IdentitiesDerived),
            IdentitiesDerived => Some(LocalKeysMaterialized),
            LocalKeysMaterialized => Some(TransactionsBuilt),
            TransactionsBuilt => Some(LedgersWritten),
            LedgersWritten => Some(Done),
            Done => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == BootstrapPhase::Done
    }
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapPhase::Idle => "Idle",
            BootstrapPhase::TopologyResolved => "TopologyResolved",
            BootstrapPhase::IdentitiesDerived => "IdentitiesDerived",
            BootstrapPhase::LocalKeysMaterialized => "LocalKeysMaterialized",
            BootstrapPhase::TransactionsBuilt => "TransactionsBuilt",
            BootstrapPhase::LedgersWritten => "LedgersWritten",
            BootstrapPhase::Done => "Done",
        };
        f.write_str(name)
    }
}
