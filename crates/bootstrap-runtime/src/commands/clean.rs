//! `clean`: remove a network's generated state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{BootstrapConfig, NetworkPaths};
use crate::error::BootstrapError;
use crate::lock::NetworkLock;

/// Remove the network's log, keys and genesis directories; with `full`,
/// also the ledger and log base directories. Returns what was removed.
pub fn clean(config: &BootstrapConfig, full: bool) -> Result<Vec<PathBuf>, BootstrapError> {
    let paths = NetworkPaths::new(config);
    let lock = if paths.ledger_base_dir.exists() {
        Some(NetworkLock::acquire(&paths.ledger_base_dir, &config.network_name)?)
    } else {
        None
    };

    let mut targets = vec![&paths.log_dir, &paths.keys_dir, &paths.genesis_dir];
    if full {
        targets.push(&paths.ledger_base_dir);
        targets.push(&paths.log_base_dir);
    }

    let mut removed = Vec::new();
    for target in targets {
        if remove_dir_if_present(target)? {
            info!(path = %target.display(), "Removed");
            removed.push(target.clone());
        }
    }

    drop(lock);
    Ok(removed)
}

fn remove_dir_if_present(path: &Path) -> Result<bool, BootstrapError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(BootstrapError::Cleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}
