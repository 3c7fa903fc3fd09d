//! Proposal assembly and the governor `propose` request

use chrono::{DateTime, Utc};
use ethereum_types::{Address, U256};
use ethers::abi::AbiEncode;
use ethers::contract::EthCall;
use serde::Serialize;
use tracing::info;

use crate::contracts::ProposeCall;
use crate::shared::address::shorten_address;
use crate::shared::errors::ValidationError;
use crate::shared::utils::hex_bytes_vec;
use super::action::EncodedCall;

/// Proposal ready for submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalDraft {
    pub calls: Vec<EncodedCall>,
    pub description: String,
    pub creator: Address,
    pub created_at: DateTime<Utc>,
}

/// Parallel arrays accepted by the governor's `propose`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProposalData {
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub signatures: Vec<String>,
    #[serde(with = "hex_bytes_vec")]
    pub calldatas: Vec<Vec<u8>>,
    pub description: String,
}

/// `# {title}`, blank line, body. No escaping: the governor stores raw markdown.
pub fn compose_description(title: &str, body: &str) -> String {
    format!("# {}\n\n{}\n", title, body)
}

/// Build a draft from already encoded calls
pub fn assemble(
    calls: Vec<EncodedCall>,
    title: &str,
    body: &str,
    creator: Address,
) -> Result<ProposalDraft, ValidationError> {
    if calls.is_empty() {
        return Err(ValidationError::NoActions);
    }
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }

    info!(
        "Assembled proposal \"{}\" with {} action(s) for {}",
        title,
        calls.len(),
        shorten_address(&creator)
    );

    Ok(ProposalDraft {
        calls,
        description: compose_description(title, body),
        creator,
        created_at: Utc::now(),
    })
}

impl ProposalDraft {
    pub fn to_create_proposal_data(&self) -> CreateProposalData {
        CreateProposalData {
            targets: self.calls.iter().map(EncodedCall::target).collect(),
            values: self.calls.iter().map(EncodedCall::value).collect(),
            signatures: self.calls.iter().map(|c| c.signature().to_string()).collect(),
            calldatas: self.calls.iter().map(|c| c.calldata().to_vec()).collect(),
            description: self.description.clone(),
        }
    }
}

impl CreateProposalData {
    pub fn propose_signature() -> String {
        ProposeCall::abi_signature().into_owned()
    }

    /// Full `propose(...)` transaction input, selector included
    pub fn calldata(&self) -> Vec<u8> {
        ProposeCall {
            targets: self.targets.clone(),
            values: self.values.clone(),
            signatures: self.signatures.clone(),
            calldatas: self.calldatas.iter().cloned().map(Into::into).collect(),
            description: self.description.clone(),
        }
        .encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call() -> EncodedCall {
        EncodedCall::new(
            Address::repeat_byte(0xfe),
            U256::zero(),
            "transfer(address,uint256)".to_string(),
            vec![0u8; 64],
        )
    }

    fn creator() -> Address {
        Address::repeat_byte(0xc0)
    }

    #[test]
    fn test_assemble_requires_fields() {
        assert_eq!(assemble(vec![], "t", "b", creator()), Err(ValidationError::NoActions));
        assert_eq!(assemble(vec![call()], "", "b", creator()), Err(ValidationError::EmptyTitle));
        assert_eq!(assemble(vec![call()], "t", "", creator()), Err(ValidationError::EmptyBody));
    }

    #[test]
    fn test_description_is_verbatim_markdown() {
        let draft = assemble(vec![call()], "Fund *grants*", "Send <b>10</b> FESW\n- a\n- b", creator()).unwrap();
        assert_eq!(draft.description, "# Fund *grants*\n\nSend <b>10</b> FESW\n- a\n- b\n");
        assert_eq!(draft.creator, creator());
    }

    #[test]
    fn test_create_proposal_data_arrays_line_up() {
        let draft = assemble(vec![call(), call()], "t", "b", creator()).unwrap();
        let data = draft.to_create_proposal_data();

        assert_eq!(data.targets, vec![Address::repeat_byte(0xfe); 2]);
        assert_eq!(data.values, vec![U256::zero(); 2]);
        assert_eq!(data.signatures.len(), 2);
        assert_eq!(data.calldatas, vec![vec![0u8; 64]; 2]);
        assert_eq!(data.description, "# t\n\nb\n");
    }

    #[test]
    fn test_propose_calldata_layout() {
        let draft = assemble(vec![call()], "t", "b", creator()).unwrap();
        let input = draft.to_create_proposal_data().calldata();

        assert_eq!(hex::encode(&input[..4]), "da95691a");
        let args = &input[4..];
        // five head words, then the targets array starts right after them
        assert_eq!(U256::from_big_endian(&args[..32]), U256::from(160u64));
        assert_eq!(U256::from_big_endian(&args[160..192]), U256::one());
        assert_eq!(&args[192 + 12..224], Address::repeat_byte(0xfe).as_bytes());
    }

    #[test]
    fn test_propose_signature() {
        assert_eq!(
            CreateProposalData::propose_signature(),
            "propose(address[],uint256[],string[],bytes[],string)"
        );
    }

    #[test]
    fn test_serialises_calldatas_as_hex() {
        let data = CreateProposalData {
            targets: vec![Address::repeat_byte(0x01)],
            values: vec![U256::zero()],
            signatures: vec!["approve(address,uint256)".to_string()],
            calldatas: vec![vec![0xab, 0xcd]],
            description: "# t\n\nb\n".to_string(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["calldatas"][0], "0xabcd");
        assert_eq!(json["signatures"][0], "approve(address,uint256)");
    }
}
