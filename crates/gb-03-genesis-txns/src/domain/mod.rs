//! Domain Layer - transaction wire types

pub mod txn;

pub use txn::{
    GenesisTransactions, GenesisTxn, NodeInfo, NodeTxnData, NymData, ReqSignature, TxnAuthor,
    TxnBody, TxnData, TxnMetadata, NODE_TXN_TYPE, NYM_TXN_TYPE, TXN_VERSION, VALIDATOR_SERVICE,
};
