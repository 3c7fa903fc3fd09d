//! Domain layer - core business logic and entities

pub mod amount;
pub mod trade;
pub mod liquidity;
pub mod governance;
pub mod staking;
pub mod execution;
