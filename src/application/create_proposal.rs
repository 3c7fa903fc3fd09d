//! Create-proposal form state

use ethereum_types::Address;

use crate::domain::amount::try_parse_amount;
use crate::domain::governance::{
    assemble, ActionEncoder, ProposalAction, ProposalActionKind, ProposalButtonState, ProposalDraft,
    VoteEligibility,
};
use crate::shared::address::is_address;
use crate::shared::errors::AppError;
use crate::shared::types::{Currency, CurrencyAmount};

/// Values typed into the proposal page. Kept intact across failed submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProposalForm {
    pub action: ProposalActionKind,
    pub to_address: String,
    pub currency: Currency,
    pub amount: String,
    pub title: String,
    pub body: String,
}

impl CreateProposalForm {
    /// Empty form defaulting to a transfer of the governance token
    pub fn new(governance_token: Currency) -> Self {
        Self {
            action: ProposalActionKind::TransferToken,
            to_address: String::new(),
            currency: governance_token,
            amount: String::new(),
            title: String::new(),
            body: String::new(),
        }
    }

    /// Amount that parses to a non-zero quantity of the selected token
    pub fn parsed_amount(&self) -> Option<CurrencyAmount> {
        let token = self.currency.as_token()?;
        try_parse_amount(&self.amount, token)
    }

    pub fn is_form_invalid(&self) -> bool {
        !is_address(&self.to_address)
            || self.parsed_amount().is_none()
            || self.title.is_empty()
            || self.body.is_empty()
    }

    pub fn to_action(&self) -> ProposalAction {
        ProposalAction::new(self.action, self.to_address.clone(), self.currency.clone(), self.amount.clone())
    }

    pub fn build_draft(&self, creator: Address) -> Result<ProposalDraft, AppError> {
        let call = ActionEncoder::new().encode(&self.to_action())?;
        Ok(assemble(vec![call], &self.title, &self.body, creator)?)
    }

    pub fn button_state(&self, eligibility: &VoteEligibility) -> ProposalButtonState {
        ProposalButtonState::new(eligibility, self.is_form_invalid())
    }
}
