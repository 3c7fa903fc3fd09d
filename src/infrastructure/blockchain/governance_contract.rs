//! Governor and vote-token reads through contract bindings

use async_trait::async_trait;
use ethereum_types::{Address, U256};
use ethers::contract::ContractError;
use ethers::providers::{Http, Middleware, Provider};
use tracing::debug;

use crate::contracts::{GovernorAlpha, VoteToken};
use crate::domain::governance::{GovernanceReader, ProposalStatus};
use crate::shared::errors::{AppError, RpcError};
use crate::shared::types::{CurrencyAmount, Token};
use super::rpc_client::EthClient;

fn contract_error<M: Middleware>(method: &'static str, err: ContractError<M>) -> AppError {
    RpcError::Contract {
        method,
        reason: err.to_string(),
    }
    .into()
}

/// Governor contract plus its vote token
pub struct RpcGovernance {
    governor: GovernorAlpha<Provider<Http>>,
    votes: VoteToken<Provider<Http>>,
    vote_token: Token,
}

impl RpcGovernance {
    pub fn new(client: &EthClient, governor: Address, vote_token: Token) -> Self {
        Self {
            governor: GovernorAlpha::new(governor, client.provider()),
            votes: VoteToken::new(vote_token.address, client.provider()),
            vote_token,
        }
    }

    pub fn governor(&self) -> Address {
        self.governor.address()
    }

    pub fn vote_token(&self) -> &Token {
        &self.vote_token
    }
}

#[async_trait]
impl GovernanceReader for RpcGovernance {
    async fn latest_proposal_id(&self, account: Address) -> Result<U256, AppError> {
        debug!("latestProposalIds({:?})", account);
        self.governor
            .latest_proposal_ids(account)
            .call()
            .await
            .map_err(|e| contract_error("latestProposalIds", e))
    }

    async fn proposal_status(&self, proposal_id: U256) -> Result<ProposalStatus, AppError> {
        debug!("state({})", proposal_id);
        let raw = self
            .governor
            .state(proposal_id)
            .call()
            .await
            .map_err(|e| contract_error("state", e))?;
        ProposalStatus::from_u8(raw)
            .ok_or_else(|| AppError::BlockchainError(format!("Unknown proposal state {}", raw)))
    }

    async fn available_votes(&self, account: Address) -> Result<CurrencyAmount, AppError> {
        let votes = self
            .votes
            .get_current_votes(account)
            .call()
            .await
            .map_err(|e| contract_error("getCurrentVotes", e))?;
        Ok(CurrencyAmount::from_raw(self.vote_token.clone(), U256::from(votes)))
    }

    async fn proposal_threshold(&self) -> Result<CurrencyAmount, AppError> {
        let threshold = self
            .governor
            .proposal_threshold()
            .call()
            .await
            .map_err(|e| contract_error("proposalThreshold", e))?;
        Ok(CurrencyAmount::from_raw(self.vote_token.clone(), threshold))
    }
}
