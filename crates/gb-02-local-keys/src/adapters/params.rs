//! Node-parameters file writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::NodeParams;
use crate::error::KeyStoreError;
use crate::ports::NodeParamsSink;

/// Writes `<keys_dir>/<NodeName>/<file_name>`.
#[derive(Clone, Debug)]
pub struct FileNodeParamsWriter {
    root: PathBuf,
    file_name: String,
}

impl FileNodeParamsWriter {
    pub fn new<P: AsRef<Path>>(root: P, file_name: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file_name: file_name.into(),
        }
    }

    pub fn path_for(&self, node_name: &str) -> PathBuf {
        self.root.join(node_name).join(&self.file_name)
    }
}

impl NodeParamsSink for FileNodeParamsWriter {
    fn write_params(&self, params: &NodeParams) -> Result<(), KeyStoreError> {
        let path = self.path_for(&params.node_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| KeyStoreError::io(parent, e))?;
        }
        fs::write(&path, params.render()).map_err(|e| KeyStoreError::io(&path, e))?;
        info!(node = %params.node_name, path = %path.display(), "Wrote node parameters");
        Ok(())
    }
}
