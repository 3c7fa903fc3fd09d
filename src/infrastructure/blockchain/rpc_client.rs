//! Ethereum node access through an ethers HTTP provider

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::TransactionRequest as EthTransactionRequest;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::domain::execution::{TransactionRequest, TransactionSender, TxHash};
use crate::shared::errors::{RpcError, SubmissionError};

/// Node/wallet client shared by contract reads and transaction sends
pub struct EthClient {
    provider: Arc<Provider<Http>>,
    url: String,
}

impl EthClient {
    /// Create new client with a request timeout on the underlying HTTP transport
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RpcError> {
        let parsed = Url::parse(url).map_err(|e| RpcError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        let provider = Provider::new(Http::new_with_client(parsed, http));

        debug!("Provider ready for {}", url);

        Ok(Self {
            provider: Arc::new(provider),
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn provider(&self) -> Arc<Provider<Http>> {
        Arc::clone(&self.provider)
    }
}

fn to_eth_request(request: &TransactionRequest) -> EthTransactionRequest {
    let tx = EthTransactionRequest::new()
        .from(request.from)
        .to(request.to)
        .value(request.value)
        .data(request.data.clone());
    match request.gas {
        Some(gas) => tx.gas(gas),
        None => tx,
    }
}

#[async_trait]
impl TransactionSender for EthClient {
    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash, SubmissionError> {
        let pending = self
            .provider
            .send_transaction(to_eth_request(&request), None)
            .await
            .map_err(|e| SubmissionError::from(RpcError::from(e)))?;
        let hash = pending.tx_hash();
        info!("Transaction to {:?} sent: {:?}", request.to, hash);
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::{Address, U256};
    use ethers::providers::{HttpClientError, JsonRpcError, ProviderError};
    use ethers::types::NameOrAddress;

    fn request(gas: Option<U256>) -> TransactionRequest {
        TransactionRequest {
            from: Address::repeat_byte(0x01),
            to: Address::repeat_byte(0x02),
            value: U256::zero(),
            data: vec![0xe9, 0xfa, 0xd8, 0xee],
            gas,
        }
    }

    #[test]
    fn test_client_builds() {
        let client = EthClient::new("http://127.0.0.1:8545", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:8545");
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = EthClient::new("not a url", Duration::from_secs(5)).err().unwrap();
        assert!(matches!(err, RpcError::InvalidUrl { url, .. } if url == "not a url"));
    }

    #[test]
    fn test_request_conversion() {
        let tx = to_eth_request(&request(Some(U256::from(300_000u64))));
        assert_eq!(tx.from, Some(Address::repeat_byte(0x01)));
        assert_eq!(tx.to, Some(NameOrAddress::Address(Address::repeat_byte(0x02))));
        assert_eq!(tx.gas, Some(U256::from(300_000u64)));
        assert_eq!(tx.data.unwrap().to_vec(), vec![0xe9, 0xfa, 0xd8, 0xee]);

        // no gas means the node estimates it
        assert!(to_eth_request(&request(None)).gas.is_none());
    }

    #[test]
    fn test_wallet_refusal_is_rejection() {
        let refusal = ProviderError::from(HttpClientError::JsonRpcError(JsonRpcError {
            code: 4001,
            message: "User denied transaction signature".to_string(),
            data: None,
        }));
        assert_eq!(
            SubmissionError::from(RpcError::from(refusal)),
            SubmissionError::Rejected("User denied transaction signature".to_string())
        );
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let failure = ProviderError::CustomError("connection reset".to_string());
        assert!(matches!(
            SubmissionError::from(RpcError::from(failure)),
            SubmissionError::NetworkError(_)
        ));
    }
}
