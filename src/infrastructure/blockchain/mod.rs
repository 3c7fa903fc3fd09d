//! Direct blockchain access through an ethers provider

pub mod governance_contract;
pub mod rpc_client;

pub use governance_contract::RpcGovernance;
pub use rpc_client::EthClient;
