//! # GB-03 Genesis Transactions
//!
//! Turns a `RoleSet` and the per-node keys into the ordered genesis
//! transactions of the two ledgers.
//!
//! ## Ordering
//!
//! Sequence numbers are consensus-relevant, so the order is fixed:
//!
//! | Ledger | Transactions, in input list order | Creator |
//! |--------|-----------------------------------|---------|
//! | domain | trustees (role `0`) | none |
//! | domain | stewards (role `2`) | first trustee |
//! | domain | clients (no role) | first trustee |
//! | pool | nodes | sponsoring steward |
//!
//! Each ledger counts from 1 on its own, with no gaps.
//!
//! ## Wire Format
//!
//! One JSON object per line, keys in declaration order:
//!
//! ```text
//! {"reqSignature":{},"txn":{"data":{..},"metadata":{"from":".."},"type":"1"},"txnMetadata":{"seqNo":1},"ver":"1"}
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{
    GenesisTransactions, GenesisTxn, NodeInfo, NodeTxnData, NymData, ReqSignature, TxnAuthor,
    TxnBody, TxnData, TxnMetadata, NODE_TXN_TYPE, NYM_TXN_TYPE, TXN_VERSION, VALIDATOR_SERVICE,
};
pub use error::GenesisTxnError;
pub use ports::GenesisTxnApi;
pub use service::GenesisTransactionBuilder;
