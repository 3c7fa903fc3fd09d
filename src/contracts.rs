//! Contract bindings for the calls this crate reads or encodes

use ethers::contract::abigen;

abigen!(
    Erc20,
    r#"[
        function transfer(address to, uint256 amount) external returns (bool)
        function approve(address spender, uint256 amount) external returns (bool)
    ]"#,
);

abigen!(
    GovernorAlpha,
    r#"[
        function propose(address[] targets, uint256[] values, string[] signatures, bytes[] calldatas, string description) external returns (uint256)
        function latestProposalIds(address proposer) external view returns (uint256)
        function state(uint256 proposalId) external view returns (uint8)
        function proposalThreshold() external view returns (uint256)
    ]"#,
);

abigen!(
    VoteToken,
    r#"[
        function getCurrentVotes(address account) external view returns (uint96)
    ]"#,
);

abigen!(
    StakingRewards,
    r#"[
        function exit() external
    ]"#,
);

/// Argument encoding of a call, without its 4-byte selector
pub fn encode_args<C: ethers::abi::AbiEncode>(call: C) -> Vec<u8> {
    let mut data = call.encode();
    data.drain(..4);
    data
}
