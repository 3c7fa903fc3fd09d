//! Proposal action encoding

use ethereum_types::U256;
use ethers::contract::EthCall;
use tracing::debug;

use crate::contracts::{encode_args, ApproveCall, TransferCall};
use crate::domain::amount::AmountParser;
use crate::shared::address::parse_address;
use crate::shared::errors::EncodingError;
use crate::shared::types::Currency;
use super::action::{EncodedCall, ProposalAction};

/// Maps form actions onto ERC-20 calls made by the governance timelock
pub struct ActionEncoder {
    parser: AmountParser,
}

impl ActionEncoder {
    pub fn new() -> Self {
        Self {
            parser: AmountParser::new(),
        }
    }

    pub fn encode(&self, action: &ProposalAction) -> Result<EncodedCall, EncodingError> {
        let (to, currency, amount) = match action {
            ProposalAction::TransferToken {
                recipient,
                currency,
                amount,
            } => (recipient, currency, amount),
            ProposalAction::ApproveToken {
                spender,
                currency,
                amount,
            } => (spender, currency, amount),
        };

        let to = parse_address(to)?;
        let token = match currency {
            Currency::Token(token) => token,
            Currency::Native { .. } => return Err(EncodingError::NativeCurrency),
        };
        let amount = self.parser.parse(amount, token)?;
        if amount.is_zero() {
            return Err(EncodingError::ZeroAmount);
        }

        let (signature, calldata) = match action {
            ProposalAction::TransferToken { .. } => (
                TransferCall::abi_signature(),
                encode_args(TransferCall {
                    to,
                    amount: amount.quotient(),
                }),
            ),
            ProposalAction::ApproveToken { .. } => (
                ApproveCall::abi_signature(),
                encode_args(ApproveCall {
                    spender: to,
                    amount: amount.quotient(),
                }),
            ),
        };

        debug!("Encoded {} of {} for {}", signature, amount, action.kind());

        Ok(EncodedCall::new(token.address, U256::zero(), signature.to_string(), calldata))
    }
}

impl Default for ActionEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a single action with a fresh encoder
pub fn encode_action(action: &ProposalAction) -> Result<EncodedCall, EncodingError> {
    ActionEncoder::new().encode(action)
}
