//! Advanced swap details: the rows shown under a quoted trade

use serde::Serialize;

use crate::shared::errors::MathError;
use crate::shared::types::Percent;
use super::{SlippageCalculator, Trade};

const ONE_BIPS: u32 = 1;
const ALLOWED_PRICE_IMPACT_LOW_BPS: u32 = 100;
const ALLOWED_PRICE_IMPACT_MEDIUM_BPS: u32 = 300;
const ALLOWED_PRICE_IMPACT_HIGH_BPS: u32 = 500;
const BLOCKED_PRICE_IMPACT_BPS: u32 = 1_500;

/// Rendered trade details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeSummary {
    /// "Minimum received" or "Maximum sold"
    pub bound_label: &'static str,
    /// Bound with 4 significant digits and symbol
    pub bound: String,
    pub price_impact: String,
    pub price_impact_severity: u8,
    pub liquidity_provider_fee: &'static str,
    /// Only set when the trade hops through intermediate tokens
    pub route: Option<String>,
}

impl TradeSummary {
    pub fn new(trade: &Trade, slippage_bps: u32) -> Result<Self, MathError> {
        Self::with_calculator(trade, &SlippageCalculator::new(slippage_bps))
    }

    pub fn with_calculator(trade: &Trade, calculator: &SlippageCalculator) -> Result<Self, MathError> {
        let adjusted = calculator.compute(trade)?;
        let bound = adjusted.bound();

        let bound_label = if trade.is_exact_input() {
            "Minimum received"
        } else {
            "Maximum sold"
        };

        let route = (trade.path.len() > 2).then(|| {
            trade
                .path
                .iter()
                .map(|token| token.symbol.as_str())
                .collect::<Vec<_>>()
                .join(" > ")
        });

        Ok(Self {
            bound_label,
            bound: format!("{} {}", bound.to_significant(4), bound.token().symbol),
            price_impact: format_price_impact(trade.price_impact.as_ref()),
            price_impact_severity: trade.price_impact.as_ref().map(warning_severity).unwrap_or(0),
            liquidity_provider_fee: "FREE",
            route,
        })
    }
}

/// `"-"` when unknown, `"<0.01%"` under one basis point, else two decimals
pub fn format_price_impact(price_impact: Option<&Percent>) -> String {
    match price_impact {
        None => "-".to_string(),
        Some(impact) if impact.less_than(&Percent::from_bps(ONE_BIPS)) => "<0.01%".to_string(),
        Some(impact) => format!("{}%", impact.to_fixed(2)),
    }
}

/// 0 (fine) to 4 (should be blocked)
pub fn warning_severity(price_impact: &Percent) -> u8 {
    let thresholds = [
        BLOCKED_PRICE_IMPACT_BPS,
        ALLOWED_PRICE_IMPACT_HIGH_BPS,
        ALLOWED_PRICE_IMPACT_MEDIUM_BPS,
        ALLOWED_PRICE_IMPACT_LOW_BPS,
    ];
    for (i, bps) in thresholds.iter().enumerate() {
        if !price_impact.less_than(&Percent::from_bps(*bps)) {
            return 4 - i as u8;
        }
    }
    0
}
