//! # Network Lock
//!
//! Exclusive `fs2` lock held for the whole run, so two bootstraps against the
//! same network fail fast instead of interleaving writes.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("Failed to create lock file {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Network already in use ({}), holder pid {pid:?}", .path.display())]
    AlreadyLocked { pid: Option<u32>, path: PathBuf },
}

/// Held lock; released on drop.
///
/// The lock file outlives the lock. Only its pid is cleared, so every
/// process contends on the same inode.
#[derive(Debug)]
pub struct NetworkLock {
    file: File,
    path: PathBuf,
}

impl NetworkLock {
    /// Lock `<dir>/.<network>.lock`, creating `dir` if needed.
    pub fn acquire(dir: &Path, network_name: &str) -> Result<Self, LockError> {
        let path = dir.join(format!(".{}.lock", network_name));
        let create_failed = |source| LockError::CreateFailed {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(create_failed)?;
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&path)
            .map_err(create_failed)?;

        if file.try_lock_exclusive().is_err() {
            return Err(LockError::AlreadyLocked {
                pid: read_pid(&path),
                path,
            });
        }

        file.set_len(0)
            .and_then(|_| writeln!(file, "{}", std::process::id()))
            .and_then(|_| file.sync_all())
            .map_err(create_failed)?;

        debug!(path = %path.display(), "Acquired network lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for NetworkLock {
    fn drop(&mut self) {
        let _ = self.file.set_len(0);
        let _ = self.file.unlock();
    }
}

fn read_pid(path: &Path) -> Option<u32> {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
}
