//! Proposal actions and their encoded form

use std::fmt;
use std::str::FromStr;

use ethereum_types::{Address, U256};
use serde::Serialize;

use crate::shared::errors::EncodingError;
use crate::shared::types::Currency;
use crate::shared::utils::hex_bytes;

/// Action kinds offered by the proposal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProposalActionKind {
    TransferToken,
    ApproveToken,
}

impl ProposalActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalActionKind::TransferToken => "Transfer Token",
            ProposalActionKind::ApproveToken => "Approve Token",
        }
    }

    pub fn all() -> [ProposalActionKind; 2] {
        [ProposalActionKind::TransferToken, ProposalActionKind::ApproveToken]
    }
}

impl fmt::Display for ProposalActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalActionKind {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(|c: char| c == '_' || c == ' ', "-").as_str() {
            "transfer" | "transfer-token" => Ok(ProposalActionKind::TransferToken),
            "approve" | "approve-token" => Ok(ProposalActionKind::ApproveToken),
            _ => Err(EncodingError::UnsupportedAction(s.to_string())),
        }
    }
}

/// A proposal action with the raw values typed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalAction {
    /// Governance treasury sends `amount` of `currency` to `recipient`
    TransferToken {
        recipient: String,
        currency: Currency,
        amount: String,
    },
    /// Governance treasury lets `spender` pull up to `amount` of `currency`
    ApproveToken {
        spender: String,
        currency: Currency,
        amount: String,
    },
}

impl ProposalAction {
    pub fn new(
        kind: ProposalActionKind,
        to: impl Into<String>,
        currency: Currency,
        amount: impl Into<String>,
    ) -> Self {
        match kind {
            ProposalActionKind::TransferToken => ProposalAction::TransferToken {
                recipient: to.into(),
                currency,
                amount: amount.into(),
            },
            ProposalActionKind::ApproveToken => ProposalAction::ApproveToken {
                spender: to.into(),
                currency,
                amount: amount.into(),
            },
        }
    }

    pub fn kind(&self) -> ProposalActionKind {
        match self {
            ProposalAction::TransferToken { .. } => ProposalActionKind::TransferToken,
            ProposalAction::ApproveToken { .. } => ProposalActionKind::ApproveToken,
        }
    }
}

/// One contract call of a proposal.
///
/// `calldata` holds the ABI-encoded parameters only; the governor derives the
/// selector from `signature` at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedCall {
    target: Address,
    value: U256,
    signature: String,
    #[serde(with = "hex_bytes")]
    calldata: Vec<u8>,
}

impl EncodedCall {
    pub fn new(target: Address, value: U256, signature: String, calldata: Vec<u8>) -> Self {
        Self {
            target,
            value,
            signature,
            calldata,
        }
    }

    pub fn target(&self) -> Address {
        self.target
    }

    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn calldata(&self) -> &[u8] {
        &self.calldata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_from_str() {
        assert_eq!("transfer".parse::<ProposalActionKind>().unwrap(), ProposalActionKind::TransferToken);
        assert_eq!("Transfer Token".parse::<ProposalActionKind>().unwrap(), ProposalActionKind::TransferToken);
        assert_eq!("approve_token".parse::<ProposalActionKind>().unwrap(), ProposalActionKind::ApproveToken);
        assert_eq!(
            "mint".parse::<ProposalActionKind>(),
            Err(EncodingError::UnsupportedAction("mint".to_string()))
        );
    }

    #[test]
    fn test_action_kind_round_trips_through_display() {
        for kind in ProposalActionKind::all() {
            assert_eq!(kind.to_string().parse::<ProposalActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_action_new_matches_kind() {
        for kind in ProposalActionKind::all() {
            let action = ProposalAction::new(kind, "0x00", Currency::ether(), "1");
            assert_eq!(action.kind(), kind);
        }
    }
}
