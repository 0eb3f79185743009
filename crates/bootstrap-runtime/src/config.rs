//! # Bootstrap Configuration
//!
//! One immutable value, built once at startup and passed by reference to
//! every stage. Defaults, then environment, then CLI flags.

use std::env;
use std::path::{Path, PathBuf};

use gb_02_local_keys::CLIENT_CONNECTIONS_LIMIT;
use shared_types::{DEFAULT_BASE_PORT, DEFAULT_NETWORK};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Root under which ledger and log trees live.
    pub base_dir: PathBuf,
    /// First port; node `i` gets `base + 2i - 1` and `base + 2i`.
    pub base_port: u16,
    pub network_name: String,
    pub client_connections_limit: u32,
    /// File name of the per-node parameters file.
    pub node_params_file_name: String,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./genesis-data"),
            base_port: DEFAULT_BASE_PORT,
            network_name: DEFAULT_NETWORK.to_string(),
            client_connections_limit: CLIENT_CONNECTIONS_LIMIT,
            node_params_file_name: "node.env".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl BootstrapConfig {
    /// Defaults overridden by whatever `lookup` returns.
    ///
    /// # Variables
    ///
    /// - `GB_BASE_DIR`: base directory
    /// - `GB_BASE_PORT`: first port (ignored if not a valid port)
    /// - `GB_LOG_LEVEL`: log filter (default: info)
    /// - `GB_JSON_LOGS`: `true`/`1` for JSON log lines
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("GB_BASE_DIR") {
            config.base_dir = PathBuf::from(dir);
        }
        if let Some(port) = lookup("GB_BASE_PORT").and_then(|v| v.parse().ok()) {
            config.base_port = port;
        }
        if let Some(level) = lookup("GB_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(json) = lookup("GB_JSON_LOGS") {
            config.json_logs = json.eq_ignore_ascii_case("true") || json == "1";
        }

        config
    }

    pub fn with_network(mut self, network_name: impl Into<String>) -> Self {
        self.network_name = network_name.into();
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_base_port(mut self, base_port: u16) -> Self {
        self.base_port = base_port;
        self
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> BootstrapConfig {
    BootstrapConfig::from_lookup(|key| env::var(key).ok())
}

/// Directories of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPaths {
    /// `<base>/data`
    pub ledger_base_dir: PathBuf,
    /// `<base>/log`
    pub log_base_dir: PathBuf,
    /// `<base>/data/<network>`: both genesis files.
    pub genesis_dir: PathBuf,
    /// `<base>/data/<network>/keys`: one subdirectory per local node.
    pub keys_dir: PathBuf,
    /// `<base>/log/<network>`
    pub log_dir: PathBuf,
}

impl NetworkPaths {
    pub fn new(config: &BootstrapConfig) -> Self {
        Self::under(&config.base_dir, &config.network_name)
    }

    fn under(base_dir: &Path, network_name: &str) -> Self {
        let ledger_base_dir = base_dir.join("data");
        let log_base_dir = base_dir.join("log");
        let genesis_dir = ledger_base_dir.join(network_name);
        Self {
            keys_dir: genesis_dir.join("keys"),
            log_dir: log_base_dir.join(network_name),
            genesis_dir,
            ledger_base_dir,
            log_base_dir,
        }
    }
}
