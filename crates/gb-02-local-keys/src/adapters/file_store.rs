//! File-backed key store.
//!
//! Layout per node:
//!
//! ```text
//! <keys_dir>/<NodeName>/
//!   verif_keys/<NodeName>.key         base58 verkey
//!   sig_keys/<NodeName>.key_secret    hex signing seed (0600)
//!   bls_keys/bls_pk                   base58 BLS public key
//!   bls_keys/bls_pk_pop               base58 proof of possession
//!   bls_keys/bls_sk                   hex BLS secret key (0600)
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use shared_crypto::{BlsKeyMaterial, BlsKeyPair, Ed25519KeyPair, Ed25519PublicKey};
use shared_types::{BlsKey, BlsProofOfPossession, Verkey};
use tracing::debug;

use crate::error::KeyStoreError;
use crate::ports::{LocalKeyStore, StoredKeys};

const VERIF_DIR: &str = "verif_keys";
const SIG_DIR: &str = "sig_keys";
const BLS_DIR: &str = "bls_keys";
const BLS_PK_FILE: &str = "bls_pk";
const BLS_POP_FILE: &str = "bls_pk_pop";
const BLS_SK_FILE: &str = "bls_sk";

/// Key store rooted at a network's keys directory.
#[derive(Clone, Debug)]
pub struct FileKeyStore {
    root: PathBuf,
}

impl FileKeyStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn node_dir(&self, node_name: &str) -> PathBuf {
        self.root.join(node_name)
    }

    fn verkey_path(&self, node_name: &str) -> PathBuf {
        self.node_dir(node_name)
            .join(VERIF_DIR)
            .join(format!("{}.key", node_name))
    }

    fn secret_path(&self, node_name: &str) -> PathBuf {
        self.node_dir(node_name)
            .join(SIG_DIR)
            .join(format!("{}.key_secret", node_name))
    }

    fn bls_path(&self, node_name: &str, file: &str) -> PathBuf {
        self.node_dir(node_name).join(BLS_DIR).join(file)
    }

    fn read_bls(&self, node_name: &str) -> Result<BlsKeyMaterial, KeyStoreError> {
        let key = read_trimmed(&self.bls_path(node_name, BLS_PK_FILE))?
            .ok_or_else(|| missing(self.bls_path(node_name, BLS_PK_FILE)))?;
        let pop = read_trimmed(&self.bls_path(node_name, BLS_POP_FILE))?
            .ok_or_else(|| missing(self.bls_path(node_name, BLS_POP_FILE)))?;
        Ok(BlsKeyMaterial {
            key: BlsKey::new(key),
            pop: BlsProofOfPossession::new(pop),
        })
    }
}

impl LocalKeyStore for FileKeyStore {
    fn stored_verkey(&self, node_name: &str) -> Result<Option<Verkey>, KeyStoreError> {
        let path = self.verkey_path(node_name);
        let Some(text) = read_trimmed(&path)? else {
            return Ok(None);
        };
        let verkey = Verkey::new(text);
        Ed25519PublicKey::from_verkey(&verkey).map_err(|e| KeyStoreError::Corrupt {
            path,
            reason: e.to_string(),
        })?;
        Ok(Some(verkey))
    }

    fn generate_and_store(
        &self,
        node_name: &str,
        seed: &[u8],
    ) -> Result<StoredKeys, KeyStoreError> {
        let signing = Ed25519KeyPair::from_seed(seed)?;
        let bls = BlsKeyPair::from_seed(seed)?;

        write_file(
            &self.verkey_path(node_name),
            signing.public_key().verkey().as_str(),
            false,
        )?;
        write_file(
            &self.secret_path(node_name),
            &hex::encode(signing.to_seed()),
            true,
        )?;
        write_file(
            &self.bls_path(node_name, BLS_PK_FILE),
            bls.public_key().to_base58().as_str(),
            false,
        )?;
        write_file(
            &self.bls_path(node_name, BLS_POP_FILE),
            bls.proof_of_possession().to_base58().as_str(),
            false,
        )?;
        write_file(
            &self.bls_path(node_name, BLS_SK_FILE),
            &hex::encode(bls.secret_bytes()),
            true,
        )?;

        debug!(node = node_name, dir = %self.node_dir(node_name).display(), "Stored node keys");

        // Report what is on disk, not what was computed.
        let verkey = self
            .stored_verkey(node_name)?
            .ok_or_else(|| missing(self.verkey_path(node_name)))?;
        Ok(StoredKeys {
            verkey,
            bls: self.read_bls(node_name)?,
        })
    }
}

fn missing(path: PathBuf) -> KeyStoreError {
    KeyStoreError::Corrupt {
        path,
        reason: "file missing after write".to_string(),
    }
}

fn read_trimmed(path: &Path) -> Result<Option<String>, KeyStoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text.trim().to_string())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(KeyStoreError::io(path, e)),
    }
}

/// Write via a temp file and rename so a crash never leaves a half key.
fn write_file(path: &Path, contents: &str, secret: bool) -> Result<(), KeyStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| KeyStoreError::io(parent, e))?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| KeyStoreError::io(&temp_path, e))?;
    if secret {
        restrict_permissions(&file).map_err(|e| KeyStoreError::io(&temp_path, e))?;
    }
    file.write_all(contents.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .and_then(|_| file.sync_all())
        .map_err(|e| KeyStoreError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| KeyStoreError::io(path, e))
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
