//! `generate`: full bootstrap against the on-disk network directory.

use crate::config::{BootstrapConfig, NetworkPaths};
use crate::error::BootstrapError;
use crate::lock::NetworkLock;
use crate::orchestrator::{BootstrapReport, BootstrapRequest, FileBootstrapper};

/// Lock the network, then run every phase with file-backed adapters.
pub fn generate(
    config: &BootstrapConfig,
    request: &BootstrapRequest,
) -> Result<BootstrapReport, BootstrapError> {
    let paths = NetworkPaths::new(config);
    let _lock = NetworkLock::acquire(&paths.ledger_base_dir, &config.network_name)?;
    FileBootstrapper::from_config(config, &paths).run(request)
}
