//! Governance domain - proposal encoding, assembly and eligibility

mod action;
mod encoder;
mod eligibility;
mod proposal;

pub use action::{EncodedCall, ProposalAction, ProposalActionKind};
pub use encoder::{encode_action, ActionEncoder};
pub use eligibility::{IneligibleReason, ProposalButtonState, ProposalStatus, VoteEligibility};
pub use proposal::{assemble, compose_description, CreateProposalData, ProposalDraft};

use async_trait::async_trait;
use ethereum_types::{Address, U256};

use crate::shared::errors::AppError;
use crate::shared::types::CurrencyAmount;

/// Read-only view of the governor and its vote token
#[async_trait]
pub trait GovernanceReader: Send + Sync {
    /// Latest proposal created by `account`; zero when there is none
    async fn latest_proposal_id(&self, account: Address) -> Result<U256, AppError>;

    async fn proposal_status(&self, proposal_id: U256) -> Result<ProposalStatus, AppError>;

    async fn available_votes(&self, account: Address) -> Result<CurrencyAmount, AppError>;

    async fn proposal_threshold(&self) -> Result<CurrencyAmount, AppError>;
}
