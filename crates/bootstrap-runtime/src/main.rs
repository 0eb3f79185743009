//! # Genesis Bootstrap
//!
//! Generates the identities, local node keys and genesis ledgers of a new
//! permissioned pool.
//!
//! ```text
//! genesis-bootstrap generate --nodes 4 --clients 2 --nodeNum 1 2
//! genesis-bootstrap clean --network sandbox --full
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bootstrap_runtime::cli::{Cli, Command};
use bootstrap_runtime::{clean, generate, init_tracing, load_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(load_config());

    init_tracing(&config).context("Failed to initialize logging")?;

    match &cli.command {
        Command::Generate(args) => {
            let request = args.to_request(&config);
            let report = generate(&config, &request).context("Bootstrap failed")?;
            info!(
                network = %config.network_name,
                local_nodes = report.local_nodes().count(),
                "Genesis files ready"
            );
        }
        Command::Clean(args) => {
            let removed = clean(&config, args.full).context("Cleanup failed")?;
            info!(network = %config.network_name, removed = removed.len(), "Network cleaned");
        }
    }

    Ok(())
}
