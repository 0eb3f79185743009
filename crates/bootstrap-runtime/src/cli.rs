//! Command-line surface of `genesis-bootstrap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gb_01_role_definitions::DefinitionRequest;
use gb_04_genesis_ledger::WriteMode;

use crate::config::BootstrapConfig;
use crate::orchestrator::BootstrapRequest;

/// Generate genesis transactions and node keys for a new pool
#[derive(Parser)]
#[command(name = "genesis-bootstrap")]
#[command(about = "Generate genesis transactions and node keys for a new pool", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive every identity and write the domain and pool genesis files
    Generate(GenerateArgs),
    /// Remove a network's keys, genesis files and logs
    Clean(CleanArgs),
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Node count, at most 100
    #[arg(long)]
    pub nodes: usize,

    /// Client count
    #[arg(long)]
    pub clients: usize,

    /// Number(s) of the node(s) that will run on this machine
    #[arg(long = "nodeNum", num_args = 1..)]
    pub node_num: Vec<usize>,

    /// Comma separated IPs/hostnames; missing entries fall back to 127.0.0.1
    #[arg(long, value_delimiter = ',')]
    pub ips: Option<Vec<String>>,

    /// Comma separated steward seeds (32 characters each)
    #[arg(long = "stewardSeeds", value_delimiter = ',')]
    pub steward_seeds: Option<Vec<String>>,

    /// Comma separated node seeds (32 characters each)
    #[arg(long = "nodeSeeds", value_delimiter = ',')]
    pub node_seeds: Option<Vec<String>>,

    /// Comma separated trustee seeds (32 characters each)
    #[arg(long = "trusteeSeeds", value_delimiter = ',')]
    pub trustee_seeds: Option<Vec<String>>,

    /// Network name (default sandbox)
    #[arg(long)]
    pub network: Option<String>,

    /// Keep existing genesis files and append after their last entry
    #[arg(long = "appendToLedgers")]
    pub append_to_ledgers: bool,

    /// First port; node i gets base+2i-1 and base+2i
    #[arg(long = "base-port")]
    pub base_port: Option<u16>,

    /// Root of the data and log trees
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct CleanArgs {
    /// Network name (default sandbox)
    #[arg(long)]
    pub network: Option<String>,

    /// Also remove the ledger and log base directories
    #[arg(long)]
    pub full: bool,

    /// Root of the data and log trees
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,
}

impl Cli {
    /// Layer CLI flags over `config`.
    pub fn apply(&self, config: BootstrapConfig) -> BootstrapConfig {
        match &self.command {
            Command::Generate(args) => overrides(config, &args.network, &args.base_dir, args.base_port),
            Command::Clean(args) => overrides(config, &args.network, &args.base_dir, None),
        }
    }
}

fn overrides(
    mut config: BootstrapConfig,
    network: &Option<String>,
    base_dir: &Option<PathBuf>,
    base_port: Option<u16>,
) -> BootstrapConfig {
    if let Some(network) = network {
        config = config.with_network(network.clone());
    }
    if let Some(base_dir) = base_dir {
        config = config.with_base_dir(base_dir.clone());
    }
    if let Some(base_port) = base_port {
        config = config.with_base_port(base_port);
    }
    config
}

fn trimmed(values: &Option<Vec<String>>) -> Option<Vec<String>> {
    values
        .as_ref()
        .map(|values| values.iter().map(|v| v.trim().to_string()).collect())
}

impl GenerateArgs {
    pub fn to_request(&self, config: &BootstrapConfig) -> BootstrapRequest {
        let definition = DefinitionRequest {
            node_count: self.nodes,
            client_count: self.clients,
            ips: trimmed(&self.ips),
            steward_seeds: trimmed(&self.steward_seeds),
            node_seeds: trimmed(&self.node_seeds),
            trustee_seeds: trimmed(&self.trustee_seeds),
            base_port: config.base_port,
        };
        BootstrapRequest::new(definition)
            .with_local_nodes(self.node_num.iter().copied())
            .with_write_mode(WriteMode::from_append_flag(self.append_to_ledgers))
    }
}
