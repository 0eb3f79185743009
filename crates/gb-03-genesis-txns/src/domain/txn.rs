//! Genesis transaction wire types.
//!
//! Field order in every struct is the order keys appear on the wire.

use gb_01_role_definitions::{IdentityDefinition, NodeDefinition};
use gb_02_local_keys::NodeKeys;
use serde::{Deserialize, Serialize};
use shared_types::{BlsKey, BlsProofOfPossession, Did, LedgerId, Verkey};

/// Transaction format version.
pub const TXN_VERSION: &str = "1";

/// Role grant.
pub const NYM_TXN_TYPE: &str = "1";

/// Node registration.
pub const NODE_TXN_TYPE: &str = "0";

/// The only service a genesis node offers.
pub const VALIDATOR_SERVICE: &str = "VALIDATOR";

/// One genesis ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisTxn {
    #[serde(rename = "reqSignature")]
    pub req_signature: ReqSignature,
    pub txn: TxnBody,
    #[serde(rename = "txnMetadata")]
    pub txn_metadata: TxnMetadata,
    pub ver: String,
}

/// Genesis transactions are unsigned; always `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqSignature {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnBody {
    pub data: TxnData,
    pub metadata: TxnAuthor,
    #[serde(rename = "type")]
    pub txn_type: String,
}

/// Creator of a transaction; empty for root-granted trustees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Did>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnMetadata {
    #[serde(rename = "seqNo")]
    pub seq_no: u64,
}

/// Payload of either transaction type. Node first: only it has `data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxnData {
    Node(NodeTxnData),
    Nym(NymData),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NymData {
    pub dest: Did,
    pub verkey: Verkey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub alias: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTxnData {
    pub data: NodeInfo,
    /// Full node verkey.
    pub dest: Verkey,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub alias: String,
    pub blskey: BlsKey,
    pub blskey_pop: BlsProofOfPossession,
    pub client_ip: String,
    pub client_port: u16,
    pub node_ip: String,
    pub node_port: u16,
    pub services: Vec<String>,
}

impl GenesisTxn {
    fn wrap(seq_no: u64, data: TxnData, from: Option<Did>, txn_type: &str) -> Self {
        Self {
            req_signature: ReqSignature::default(),
            txn: TxnBody {
                data,
                metadata: TxnAuthor { from },
                txn_type: txn_type.to_string(),
            },
            txn_metadata: TxnMetadata { seq_no },
            ver: TXN_VERSION.to_string(),
        }
    }

    /// Role grant for `identity`, created by `creator` when given.
    pub fn nym(seq_no: u64, identity: &IdentityDefinition, creator: Option<&Did>) -> Self {
        let data = NymData {
            dest: identity.did.clone(),
            verkey: identity.abbreviated_verkey.clone(),
            role: identity.role.ledger_code().map(str::to_string),
            alias: identity.name.clone(),
        };
        Self::wrap(seq_no, TxnData::Nym(data), creator.cloned(), NYM_TXN_TYPE)
    }

    /// Registration of `node` with its materialized keys, sponsored by `steward`.
    pub fn node(seq_no: u64, node: &NodeDefinition, keys: &NodeKeys, steward: &Did) -> Self {
        let data = NodeTxnData {
            data: NodeInfo {
                alias: node.name().to_string(),
                blskey: keys.bls.key.clone(),
                blskey_pop: keys.bls.pop.clone(),
                client_ip: node.ip.clone(),
                client_port: node.client_port,
                node_ip: node.ip.clone(),
                node_port: node.node_port,
                services: vec![VALIDATOR_SERVICE.to_string()],
            },
            dest: keys.verkey.clone(),
        };
        Self::wrap(
            seq_no,
            TxnData::Node(data),
            Some(steward.clone()),
            NODE_TXN_TYPE,
        )
    }

    pub fn seq_no(&self) -> u64 {
        self.txn_metadata.seq_no
    }

    /// Same transaction at a different position.
    pub fn with_seq_no(mut self, seq_no: u64) -> Self {
        self.txn_metadata.seq_no = seq_no;
        self
    }

    /// Ledger this transaction belongs to.
    pub fn ledger(&self) -> LedgerId {
        match self.txn.data {
            TxnData::Node(_) => LedgerId::Pool,
            TxnData::Nym(_) => LedgerId::Domain,
        }
    }

    pub fn alias(&self) -> &str {
        match &self.txn.data {
            TxnData::Node(node) => &node.data.alias,
            TxnData::Nym(nym) => &nym.alias,
        }
    }

    /// Single-line JSON form.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Output of a build: one list per ledger, each numbered from 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenesisTransactions {
    pub domain: Vec<GenesisTxn>,
    pub pool: Vec<GenesisTxn>,
}

impl GenesisTransactions {
    pub fn for_ledger(&self, ledger: LedgerId) -> &[GenesisTxn] {
        match ledger {
            LedgerId::Domain => &self.domain,
            LedgerId::Pool => &self.pool,
        }
    }
}
