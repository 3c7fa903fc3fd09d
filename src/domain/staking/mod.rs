//! Staking domain - liquidity-mining withdrawal

mod withdraw;

pub use withdraw::{StakingInfo, WithdrawError, WITHDRAW_SUMMARY};
