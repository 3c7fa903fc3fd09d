//! Add-liquidity confirmation rows

use serde::Serialize;
use tracing::debug;

use crate::shared::types::{CurrencyAmount, Percent};
use super::Price;

pub const CONFIRM_SUPPLY: &str = "Confirm Supply";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositRow {
    /// `"WETH Deposited"`
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRow {
    /// `"Share of Pool WETH🔗USDC"`
    pub label: String,
    /// `"12.35%"`
    pub percent: String,
}

/// Everything shown before the user confirms a deposit into a pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquiditySummary {
    pub deposited: [DepositRow; 2],
    /// `"1 A = x B"`, absent while no rate is known
    pub rate: Option<String>,
    /// `"1 B = y A"`
    pub inverse_rate: Option<String>,
    /// Only sub-pools the deposit actually has a share of
    pub shares: Vec<ShareRow>,
    pub button: &'static str,
}

/// Share of a sub-pool after adding `deposit` to `reserve`.
/// `None` when both are zero.
pub fn pool_share(deposit: &CurrencyAmount, reserve: &CurrencyAmount) -> Option<Percent> {
    let total = deposit.quotient().checked_add(reserve.quotient())?;
    Percent::new(deposit.quotient(), total)
}

fn share_row(first: &str, second: &str, share: Option<&Percent>) -> Option<ShareRow> {
    let share = share.filter(|s| !s.is_zero())?;
    Some(ShareRow {
        label: format!("Share of Pool {}🔗{}", first, second),
        percent: format!("{}%", share.to_significant(4)),
    })
}

impl LiquiditySummary {
    /// `price` is the rate of `amount_a` in B; without one it falls back to the
    /// ratio of the two deposits.
    pub fn new(
        amount_a: &CurrencyAmount,
        amount_b: &CurrencyAmount,
        price: Option<Price>,
        share_a: Option<&Percent>,
        share_b: Option<&Percent>,
    ) -> Self {
        let symbol_a = amount_a.token().symbol.as_str();
        let symbol_b = amount_b.token().symbol.as_str();

        let price = price.or_else(|| Price::from_amounts(amount_a, amount_b));
        let rate = price
            .as_ref()
            .and_then(|p| p.to_significant(5))
            .map(|rate| format!("1 {} = {} {}", symbol_a, rate, symbol_b));
        let inverse_rate = price
            .as_ref()
            .and_then(Price::invert)
            .and_then(|p| p.to_significant(5))
            .map(|rate| format!("1 {} = {} {}", symbol_b, rate, symbol_a));

        let shares: Vec<ShareRow> = [
            share_row(symbol_a, symbol_b, share_a),
            share_row(symbol_b, symbol_a, share_b),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!("Liquidity summary for {}/{} with {} share row(s)", symbol_a, symbol_b, shares.len());

        Self {
            deposited: [
                DepositRow {
                    label: format!("{} Deposited", symbol_a),
                    amount: amount_a.to_significant(6),
                },
                DepositRow {
                    label: format!("{} Deposited", symbol_b),
                    amount: amount_b.to_significant(6),
                },
            ],
            rate,
            inverse_rate,
            shares,
            button: CONFIRM_SUPPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Token;
    use ethereum_types::{Address, U256};

    fn weth(raw: U256) -> CurrencyAmount {
        CurrencyAmount::from_raw(Token::new(1, Address::repeat_byte(0x0e), 18, "WETH"), raw)
    }

    fn usdc(raw: u64) -> CurrencyAmount {
        CurrencyAmount::from_raw(Token::new(1, Address::repeat_byte(0x0c), 6, "USDC"), U256::from(raw))
    }

    #[test]
    fn test_rates_and_deposits() {
        // 3 WETH and 2 USDC
        let a = weth(U256::from(3u64) * U256::exp10(18));
        let b = usdc(2_000_000);
        let summary = LiquiditySummary::new(&a, &b, None, None, None);

        assert_eq!(summary.deposited[0].label, "WETH Deposited");
        assert_eq!(summary.deposited[0].amount, "3");
        assert_eq!(summary.deposited[1].amount, "2");
        assert_eq!(summary.rate.as_deref(), Some("1 WETH = 0.66667 USDC"));
        assert_eq!(summary.inverse_rate.as_deref(), Some("1 USDC = 1.5 WETH"));
        assert_eq!(summary.button, "Confirm Supply");
    }

    #[test]
    fn test_deposits_keep_six_digits_rounding_down() {
        // 1.23456789 WETH
        let a = weth(U256::from(123_456_789u64) * U256::exp10(10));
        let summary = LiquiditySummary::new(&a, &usdc(1_000_000), None, None, None);
        assert_eq!(summary.deposited[0].amount, "1.23456");
    }

    #[test]
    fn test_zero_shares_are_hidden() {
        let a = weth(U256::exp10(18));
        let b = usdc(3_000_000_000);
        let third = Percent::new(U256::one(), U256::from(3u8)).unwrap();
        let none = Percent::new(U256::zero(), U256::one()).unwrap();

        let summary = LiquiditySummary::new(&a, &b, None, Some(&third), Some(&none));
        assert_eq!(
            summary.shares,
            vec![ShareRow {
                label: "Share of Pool WETH🔗USDC".to_string(),
                percent: "33.33%".to_string(),
            }]
        );

        let summary = LiquiditySummary::new(&a, &b, None, None, Some(&third));
        assert_eq!(summary.shares[0].label, "Share of Pool USDC🔗WETH");

        assert!(LiquiditySummary::new(&a, &b, None, None, None).shares.is_empty());
    }

    #[test]
    fn test_explicit_price_wins_over_deposit_ratio() {
        let a = weth(U256::exp10(18));
        let b = usdc(1_000_000);
        let pool_price = Price::new(
            a.token().clone(),
            b.token().clone(),
            U256::exp10(18),
            U256::from(2_000_000_000u64),
        );
        let summary = LiquiditySummary::new(&a, &b, pool_price, None, None);
        assert_eq!(summary.rate.as_deref(), Some("1 WETH = 2000 USDC"));
        assert_eq!(summary.inverse_rate.as_deref(), Some("1 USDC = 0.0005 WETH"));
    }

    #[test]
    fn test_no_rate_without_base_deposit() {
        let summary = LiquiditySummary::new(&weth(U256::zero()), &usdc(5), None, None, None);
        assert!(summary.rate.is_none());
        assert!(summary.inverse_rate.is_none());
    }

    #[test]
    fn test_pool_share() {
        let share = pool_share(&usdc(1_000_000), &usdc(3_000_000)).unwrap();
        assert_eq!(share.to_significant(4), "25");
        // first deposit into an empty sub-pool owns all of it
        assert_eq!(pool_share(&usdc(5), &usdc(0)).unwrap().to_significant(4), "100");
        assert!(pool_share(&usdc(0), &usdc(0)).is_none());
        assert!(pool_share(&usdc(0), &usdc(7)).unwrap().is_zero());
    }
}
