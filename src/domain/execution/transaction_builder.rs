//! Transaction building and construction

use ethereum_types::{Address, U256};
use ethers::abi::AbiEncode;

use crate::contracts::ExitCall;
use crate::domain::governance::CreateProposalData;
use super::TransactionRequest;

/// Fixed gas limit for staking `exit()`, matching what the wallet is told upfront
pub const EXIT_GAS_LIMIT: u64 = 300_000;

/// Builds wallet transaction requests for a connected account
pub struct TransactionBuilder {
    from: Address,
}

impl TransactionBuilder {
    pub fn new(from: Address) -> Self {
        Self { from }
    }

    /// `propose(...)` on the governor; gas is left to the wallet's estimate
    pub fn build_propose_transaction(&self, governor: Address, data: &CreateProposalData) -> TransactionRequest {
        TransactionRequest {
            from: self.from,
            to: governor,
            value: U256::zero(),
            data: data.calldata(),
            gas: None,
        }
    }

    /// `exit()` on a staking-rewards contract: withdraw stake and claim rewards
    pub fn build_exit_transaction(&self, staking_rewards: Address) -> TransactionRequest {
        TransactionRequest {
            from: self.from,
            to: staking_rewards,
            value: U256::zero(),
            data: ExitCall.encode(),
            gas: Some(U256::from(EXIT_GAS_LIMIT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_transaction() {
        let builder = TransactionBuilder::new(Address::repeat_byte(0x01));
        let tx = builder.build_exit_transaction(Address::repeat_byte(0x02));

        assert_eq!(tx.from, Address::repeat_byte(0x01));
        assert_eq!(tx.to, Address::repeat_byte(0x02));
        assert_eq!(hex::encode(&tx.data), "e9fad8ee");
        assert_eq!(tx.gas, Some(U256::from(300_000u64)));
        assert!(tx.value.is_zero());
    }

    #[test]
    fn test_propose_transaction() {
        let data = CreateProposalData {
            targets: vec![Address::repeat_byte(0xfe)],
            values: vec![U256::zero()],
            signatures: vec!["transfer(address,uint256)".to_string()],
            calldatas: vec![vec![0u8; 64]],
            description: "# t\n\nb\n".to_string(),
        };
        let tx = TransactionBuilder::new(Address::repeat_byte(0x01))
            .build_propose_transaction(Address::repeat_byte(0x99), &data);

        assert_eq!(tx.to, Address::repeat_byte(0x99));
        assert_eq!(tx.data, data.calldata());
        assert!(tx.gas.is_none());

        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("gas").is_none());
        assert!(json["data"].as_str().unwrap().starts_with("0xda95691a"));
    }
}
