//! Bootstrap orchestration.

pub mod bootstrapper;
pub mod phase;
pub mod report;

pub use bootstrapper::{BootstrapRequest, Bootstrapper, FileBootstrapper};
pub use phase::BootstrapPhase;
pub use report::{BootstrapReport, NodeSummary};
