//! "Withdraw & Claim" for a mining pool

use std::fmt;

use ethereum_types::Address;

use crate::shared::types::CurrencyAmount;

/// Summary recorded alongside the exit transaction
pub const WITHDRAW_SUMMARY: &str = "Withdraw deposited liquidity";

/// Mining position of one account in one staking-rewards contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingInfo {
    pub staking_rewards: Address,
    /// One entry per sub-pool; a pair has two, one per direction.
    /// Empty while the position has not been loaded.
    pub staked_amounts: Vec<CurrencyAmount>,
    /// Unclaimed rewards, paid out by the same `exit()`
    pub earned_amount: Option<CurrencyAmount>,
}

/// Form-level reasons the withdraw button is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawError {
    ConnectWallet,
    EnterAmount,
}

impl fmt::Display for WithdrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawError::ConnectWallet => write!(f, "Connect Wallet"),
            WithdrawError::EnterAmount => write!(f, "Enter an amount"),
        }
    }
}

impl StakingInfo {
    /// Sub-pool stakes worth showing (strictly positive)
    pub fn visible_stakes(&self) -> Vec<&CurrencyAmount> {
        self.staked_amounts.iter().filter(|a| !a.is_zero()).collect()
    }

    pub fn has_stake(&self) -> bool {
        !self.visible_stakes().is_empty()
    }

    /// First failing check wins. Zero stakes still pass: `exit()` claims rewards too.
    pub fn withdraw_error(&self, account: Option<Address>) -> Option<WithdrawError> {
        if account.is_none() {
            return Some(WithdrawError::ConnectWallet);
        }
        if self.staked_amounts.is_empty() {
            return Some(WithdrawError::EnterAmount);
        }
        None
    }

    pub fn button_label(&self, account: Option<Address>) -> String {
        match self.withdraw_error(account) {
            Some(error) => error.to_string(),
            None => "Withdraw & Claim".to_string(),
        }
    }

    /// Button is drawn in its error style only once a position is loaded
    pub fn button_error(&self, account: Option<Address>) -> bool {
        self.withdraw_error(account).is_some() && !self.staked_amounts.is_empty()
    }

    /// Rewards shown under "and Claimable"
    pub fn claimable(&self) -> Option<String> {
        self.earned_amount.as_ref().map(|earned| earned.to_significant(4))
    }

    /// Pending text while the exit is in flight: `"Claiming: 1.5 FESW"`
    pub fn claiming_summary(&self) -> Option<String> {
        self.earned_amount
            .as_ref()
            .map(|earned| format!("Claiming: {} {}", earned.to_significant(4), earned.token().symbol))
    }
}
