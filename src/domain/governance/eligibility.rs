//! Advisory proposal eligibility
//!
//! The governor contract performs the authoritative check. This one only
//! avoids paying gas for a `propose` that would revert.

use std::fmt;

use serde::Serialize;

use crate::shared::types::CurrencyAmount;
use crate::shared::utils::format_whole_with_separators;

/// On-chain proposal state, in the governor's enum order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProposalStatus {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}

impl ProposalStatus {
    pub fn from_u8(value: u8) -> Option<Self> {
        use ProposalStatus::*;
        [Pending, Active, Canceled, Defeated, Succeeded, Queued, Expired, Executed]
            .get(value as usize)
            .copied()
    }

    pub fn blocks_new_proposal(&self) -> bool {
        matches!(self, ProposalStatus::Active | ProposalStatus::Pending)
    }
}

/// Why a creator may not submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IneligibleReason {
    ActiveOrPendingProposal,
    /// Carries the formatted threshold when it is known
    NotEnoughVotes { threshold: Option<String> },
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::ActiveOrPendingProposal => {
                write!(f, "You already have an active or pending proposal")
            }
            IneligibleReason::NotEnoughVotes { threshold: Some(threshold) } => {
                write!(f, "You must have {} votes to submit a proposal", threshold)
            }
            IneligibleReason::NotEnoughVotes { threshold: None } => {
                write!(f, "You don't have enough votes to submit a proposal")
            }
        }
    }
}

/// Snapshot of the chain reads the gate depends on. Rebuild it on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteEligibility {
    pub available_votes: Option<CurrencyAmount>,
    pub proposal_threshold: Option<CurrencyAmount>,
    pub latest_proposal_status: Option<ProposalStatus>,
}

impl VoteEligibility {
    pub fn new(
        available_votes: Option<CurrencyAmount>,
        proposal_threshold: Option<CurrencyAmount>,
        latest_proposal_status: Option<ProposalStatus>,
    ) -> Self {
        Self {
            available_votes,
            proposal_threshold,
            latest_proposal_status,
        }
    }

    pub fn has_active_or_pending_proposal(&self) -> bool {
        self.latest_proposal_status
            .map(|status| status.blocks_new_proposal())
            .unwrap_or(false)
    }

    /// Threshold is inclusive; unknown values never count as enough
    pub fn has_enough_votes(&self) -> bool {
        match (&self.available_votes, &self.proposal_threshold) {
            (Some(votes), Some(threshold)) => votes.quotient() >= threshold.quotient(),
            _ => false,
        }
    }

    pub fn blocked_reason(&self) -> Option<IneligibleReason> {
        if self.has_active_or_pending_proposal() {
            return Some(IneligibleReason::ActiveOrPendingProposal);
        }
        if !self.has_enough_votes() {
            let threshold = self
                .proposal_threshold
                .as_ref()
                .map(|t| format_whole_with_separators(t.quotient(), t.decimals()));
            return Some(IneligibleReason::NotEnoughVotes { threshold });
        }
        None
    }

    pub fn is_eligible(&self) -> bool {
        self.blocked_reason().is_none()
    }
}

/// What the "Create Proposal" button shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalButtonState {
    pub label: String,
    pub disabled: bool,
    pub error: bool,
}

impl ProposalButtonState {
    pub fn new(eligibility: &VoteEligibility, form_invalid: bool) -> Self {
        match eligibility.blocked_reason() {
            Some(reason) => Self {
                label: reason.to_string(),
                disabled: true,
                error: true,
            },
            None => Self {
                label: "Create Proposal".to_string(),
                disabled: form_invalid,
                error: false,
            },
        }
    }
}
