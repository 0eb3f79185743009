//! # Bootstrap Runtime Library
//!
//! Everything behind the `genesis-bootstrap` binary, exposed for tests.
//!
//! ## Run Sequence
//!
//! 1. Load configuration (defaults, environment, CLI flags)
//! 2. Install the log subscriber
//! 3. Lock the network directory
//! 4. Drive the bootstrap state machine:
//!    topology → identities → local keys → transactions → ledgers
//! 5. Log the run summary
//!
//! Any failure ends the run with the phase it failed to reach. Ledger files
//! are only replaced once every transaction has been built and buffered.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lock;
pub mod orchestrator;
pub mod telemetry;

pub use commands::{clean, generate};
pub use config::{load_config, BootstrapConfig, NetworkPaths};
pub use error::{BootstrapError, StageError};
pub use lock::{LockError, NetworkLock};
pub use orchestrator::{
    BootstrapPhase, BootstrapReport, BootstrapRequest, Bootstrapper, FileBootstrapper, NodeSummary,
};
pub use telemetry::{init_tracing, TelemetryError};
