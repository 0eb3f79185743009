//! Bootstrap error taxonomy.
//!
//! Every stage error keeps its own type and is tagged with the phase the run
//! was trying to reach when it failed.

use std::io;
use std::path::PathBuf;

use gb_01_role_definitions::DefinitionError;
use gb_02_local_keys::KeyMaterialError;
use gb_03_genesis_txns::GenesisTxnError;
use gb_04_genesis_ledger::LedgerError;
use thiserror::Error;

use crate::lock::LockError;
use crate::orchestrator::BootstrapPhase;

/// Failure of a single stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    KeyMaterial(#[from] KeyMaterialError),

    #[error(transparent)]
    Transactions(#[from] GenesisTxnError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Bootstrap aborted before reaching {phase}: {source}")]
    Stage {
        phase: BootstrapPhase,
        #[source]
        source: StageError,
    },

    #[error("Bootstrap already left Idle (now {phase}); start a new run")]
    AlreadyStarted { phase: BootstrapPhase },

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error("Failed to remove {path}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BootstrapError {
    pub(crate) fn stage(phase: BootstrapPhase, source: impl Into<StageError>) -> Self {
        BootstrapError::Stage {
            phase,
            source: source.into(),
        }
    }

    /// Phase the run failed to reach, for stage failures.
    pub fn phase(&self) -> Option<BootstrapPhase> {
        match self {
            BootstrapError::Stage { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    pub fn stage_error(&self) -> Option<&StageError> {
        match self {
            BootstrapError::Stage { source, .. } => Some(source),
            _ => None,
        }
    }
}
