//! Adapters Layer
//!
//! - `file_store`: key files under `<keys_dir>/<NodeName>/`
//! - `params`: node-parameters files
//! - `memory`: in-memory doubles for tests and dry runs

pub mod file_store;
pub mod memory;
pub mod params;

pub use file_store::FileKeyStore;
pub use memory::{InMemoryKeyStore, InMemoryParamsSink};
pub use params::FileNodeParamsWriter;
