//! Application services and use cases

use std::sync::Arc;

use ethereum_types::Address;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::execution::{
    SubmissionFlow, SubmissionState, TransactionBuilder, TransactionRequest, TransactionSender, TxHash,
};
use crate::domain::governance::{GovernanceReader, ProposalDraft, VoteEligibility};
use crate::domain::staking::{StakingInfo, WITHDRAW_SUMMARY};
use crate::shared::address::shorten_address;
use crate::shared::errors::{AppError, SubmissionError};

/// Run one attempt through `flow`.
///
/// The lock is held only to confirm and to record the outcome, never across the
/// wallet call, so `dismiss` stays reachable while the request is in flight.
async fn submit(
    flow: &RwLock<SubmissionFlow>,
    sender: &dyn TransactionSender,
    request: TransactionRequest,
) -> Result<TxHash, AppError> {
    let ticket = flow.write().await.confirm()?;

    match sender.send_transaction(request).await {
        Ok(hash) => {
            if !flow.write().await.resolve(ticket, hash) {
                debug!("Attempt was dismissed before {:?} came back", hash);
            }
            Ok(hash)
        }
        Err(e) => {
            flow.write().await.reject(ticket, &e);
            Err(e.into())
        }
    }
}

/// Proposal creation against a governor
pub struct ProposalService {
    reader: Arc<dyn GovernanceReader>,
    sender: Arc<dyn TransactionSender>,
    governor: Address,
    flow: Arc<RwLock<SubmissionFlow>>,
}

impl ProposalService {
    pub fn new(reader: Arc<dyn GovernanceReader>, sender: Arc<dyn TransactionSender>, governor: Address) -> Self {
        Self {
            reader,
            sender,
            governor,
            flow: Arc::new(RwLock::new(SubmissionFlow::new())),
        }
    }

    pub async fn state(&self) -> SubmissionState {
        self.flow.read().await.state().clone()
    }

    /// Close the confirmation; a pending wallet result is then ignored
    pub async fn dismiss(&self) {
        self.flow.write().await.dismiss();
    }

    /// Fresh chain reads on every call; nothing is cached
    pub async fn read_eligibility(&self, account: Address) -> Result<VoteEligibility, AppError> {
        let latest_id = self.reader.latest_proposal_id(account).await?;
        let latest_status = if latest_id.is_zero() {
            None
        } else {
            Some(self.reader.proposal_status(latest_id).await?)
        };

        let (votes, threshold) = tokio::try_join!(
            self.reader.available_votes(account),
            self.reader.proposal_threshold(),
        )?;

        Ok(VoteEligibility::new(Some(votes), Some(threshold), latest_status))
    }

    /// Gate and submit an assembled draft from its creator.
    ///
    /// Ineligibility is reported before the flow leaves `Idle`. A failed
    /// submission puts the flow back to `Idle` and leaves the draft untouched
    /// for a retry.
    pub async fn create_proposal(&self, draft: &ProposalDraft) -> Result<TxHash, AppError> {
        let creator = draft.creator;
        let eligibility = self.read_eligibility(creator).await?;
        if let Some(reason) = eligibility.blocked_reason() {
            warn!("Proposal by {} blocked locally: {}", shorten_address(&creator), reason);
            return Err(SubmissionError::NotEligible(reason.to_string()).into());
        }

        let data = draft.to_create_proposal_data();
        let request = TransactionBuilder::new(creator).build_propose_transaction(self.governor, &data);

        info!("Submitting proposal with {} action(s)", data.targets.len());
        let hash = submit(&self.flow, self.sender.as_ref(), request).await?;
        info!("Proposal submitted: {:?}", hash);
        Ok(hash)
    }
}

/// Liquidity-mining withdrawal
pub struct WithdrawService {
    sender: Arc<dyn TransactionSender>,
    flow: Arc<RwLock<SubmissionFlow>>,
}

impl WithdrawService {
    pub fn new(sender: Arc<dyn TransactionSender>) -> Self {
        Self {
            sender,
            flow: Arc::new(RwLock::new(SubmissionFlow::new())),
        }
    }

    pub async fn state(&self) -> SubmissionState {
        self.flow.read().await.state().clone()
    }

    pub async fn dismiss(&self) {
        self.flow.write().await.dismiss();
    }

    pub async fn withdraw(&self, staking: &StakingInfo, account: Option<Address>) -> Result<TxHash, AppError> {
        let account = match (staking.withdraw_error(account), account) {
            (None, Some(account)) => account,
            (Some(error), _) => return Err(SubmissionError::NotEligible(error.to_string()).into()),
            (None, None) => return Err(SubmissionError::NotEligible("Connect Wallet".to_string()).into()),
        };

        if let Some(claiming) = staking.claiming_summary() {
            info!("{}", claiming);
        }
        let request = TransactionBuilder::new(account).build_exit_transaction(staking.staking_rewards);
        let hash = submit(&self.flow, self.sender.as_ref(), request).await?;
        info!("{}: {:?}", WITHDRAW_SUMMARY, hash);
        Ok(hash)
    }
}
