//! Drives one bootstrap run through every phase.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use gb_01_role_definitions::{DefinitionGenerator, DefinitionRequest, RoleDefinitionApi};
use gb_02_local_keys::{
    FileKeyStore, FileNodeParamsWriter, KeyMaterializerApi, LocalKeyMaterializer, LocalKeyStore,
    NodeParamsSink,
};
use gb_03_genesis_txns::{GenesisTransactionBuilder, GenesisTxnApi};
use gb_04_genesis_ledger::{FileLedgerStore, GenesisLedgerWriter, LedgerStore, WriteMode};
use tracing::{debug, info};

use crate::config::{BootstrapConfig, NetworkPaths};
use crate::error::{BootstrapError, StageError};
use crate::orchestrator::{BootstrapPhase, BootstrapReport};

/// Everything one run needs from the operator.
#[derive(Debug, Clone)]
pub struct BootstrapRequest {
    pub definition: DefinitionRequest,
    /// 1-based indices of nodes this machine runs.
    pub local_nodes: BTreeSet<usize>,
    pub write_mode: WriteMode,
}

impl BootstrapRequest {
    pub fn new(definition: DefinitionRequest) -> Self {
        Self {
            definition,
            local_nodes: BTreeSet::new(),
            write_mode: WriteMode::Reset,
        }
    }

    pub fn with_local_nodes(mut self, local_nodes: impl IntoIterator<Item = usize>) -> Self {
        self.local_nodes = local_nodes.into_iter().collect();
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

/// Single-use bootstrap state machine.
pub struct Bootstrapper<K: LocalKeyStore, P: NodeParamsSink, L: LedgerStore> {
    generator: DefinitionGenerator,
    materializer: LocalKeyMaterializer<K, P>,
    builder: GenesisTransactionBuilder,
    writer: GenesisLedgerWriter<L>,
    genesis_dir: PathBuf,
    phase: BootstrapPhase,
}

/// Bootstrapper writing keys, params and ledgers to disk.
pub type FileBootstrapper = Bootstrapper<FileKeyStore, FileNodeParamsWriter, FileLedgerStore>;

impl FileBootstrapper {
    pub fn from_config(config: &BootstrapConfig, paths: &NetworkPaths) -> Self {
        let materializer = LocalKeyMaterializer::new(
            FileKeyStore::new(&paths.keys_dir),
            FileNodeParamsWriter::new(&paths.keys_dir, config.node_params_file_name.clone()),
        )
        .with_client_connections_limit(config.client_connections_limit);
        Self::new(materializer, FileLedgerStore::new(), &paths.genesis_dir)
    }
}

impl<K: LocalKeyStore, P: NodeParamsSink, L: LedgerStore> Bootstrapper<K, P, L> {
    pub fn new(
        materializer: LocalKeyMaterializer<K, P>,
        ledger_store: L,
        genesis_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            generator: DefinitionGenerator::default(),
            materializer,
            builder: GenesisTransactionBuilder::new(),
            writer: GenesisLedgerWriter::new(ledger_store),
            genesis_dir: genesis_dir.as_ref().to_path_buf(),
            phase: BootstrapPhase::Idle,
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    pub fn materializer(&self) -> &LocalKeyMaterializer<K, P> {
        &self.materializer
    }

    pub fn ledger_store(&self) -> &L {
        self.writer.store()
    }

    /// Run every phase in order. The bootstrapper stays where it stopped;
    /// a second call is refused.
    pub fn run(&mut self, request: &BootstrapRequest) -> Result<BootstrapReport, BootstrapError> {
        if self.phase != BootstrapPhase::Idle {
            return Err(BootstrapError::AlreadyStarted { phase: self.phase });
        }

        info!(
            nodes = request.definition.node_count,
            clients = request.definition.client_count,
            local = ?request.local_nodes,
            mode = ?request.write_mode,
            genesis_dir = %self.genesis_dir.display(),
            "Starting bootstrap"
        );

        let topology = self.generator.resolve_topology(&request.definition);
        let topology = self.complete(topology)?;

        let roles = self.generator.derive_roles(&request.definition, &topology);
        let roles = self.complete(roles)?;

        let keys = self
            .materializer
            .materialize_all(&roles, &request.local_nodes);
        let keys = self.complete(keys)?;

        let txns = self.builder.build(&roles, &keys);
        let txns = self.complete(txns)?;

        let ledgers = self
            .writer
            .write(&self.genesis_dir, &txns, request.write_mode);
        let [domain, pool] = self.complete(ledgers)?;

        self.complete(Ok::<(), StageError>(()))?;

        let report = BootstrapReport::new(&roles, &keys, domain, pool, self.genesis_dir.clone());
        report.log();
        Ok(report)
    }

    /// Move to the next phase if `outcome` succeeded, tag the error otherwise.
    fn complete<T, E>(&mut self, outcome: Result<T, E>) -> Result<T, BootstrapError>
    where
        E: Into<StageError>,
    {
        let target = self.phase.next().unwrap_or(BootstrapPhase::Done);
        let value = outcome.map_err(|e| BootstrapError::stage(target, e))?;
        debug!(from = %self.phase, to = %target, "Phase complete");
        self.phase = target;
        Ok(value)
    }
}
