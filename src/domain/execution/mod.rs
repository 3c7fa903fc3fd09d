//! Execution domain - transaction requests and the submission flow

mod flow;
mod transaction_builder;

pub use flow::{SubmissionFlow, SubmissionState, SubmissionTicket};
pub use transaction_builder::{TransactionBuilder, EXIT_GAS_LIMIT};

use async_trait::async_trait;
use ethereum_types::{Address, H256, U256};
use serde::Serialize;

use crate::shared::errors::SubmissionError;
use crate::shared::utils::hex_bytes;

/// Hash returned by the wallet once a transaction is broadcast
pub type TxHash = H256;

/// Unsigned transaction handed to the wallet for signing and broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
}

/// Wallet/provider seam that signs and broadcasts transactions
#[async_trait]
pub trait TransactionSender: Send + Sync {
    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash, SubmissionError>;
}
