//! Slippage-adjusted trade bounds

use crate::math::{calculate_max_in, calculate_min_out};
use crate::shared::errors::MathError;
use crate::shared::types::CurrencyAmount;
use super::{Trade, TradeType};

/// Worst-case amounts the user signs for.
///
/// For exact-input trades `output` is the minimum received and `input` is the
/// quoted input. For exact-output trades `input` is the maximum sent and
/// `output` is the quoted output.
#[derive(Debug, Clone, PartialEq)]
pub struct SlippageAdjustedAmounts {
    pub input: CurrencyAmount,
    pub output: CurrencyAmount,
    pub trade_type: TradeType,
}

impl SlippageAdjustedAmounts {
    pub fn minimum_received(&self) -> Option<&CurrencyAmount> {
        match self.trade_type {
            TradeType::ExactInput => Some(&self.output),
            TradeType::ExactOutput => None,
        }
    }

    pub fn maximum_sent(&self) -> Option<&CurrencyAmount> {
        match self.trade_type {
            TradeType::ExactInput => None,
            TradeType::ExactOutput => Some(&self.input),
        }
    }

    /// The bound that applies to this trade type
    pub fn bound(&self) -> &CurrencyAmount {
        match self.trade_type {
            TradeType::ExactInput => &self.output,
            TradeType::ExactOutput => &self.input,
        }
    }
}

/// Slippage calculator bound to a user tolerance
#[derive(Debug, Clone, Copy)]
pub struct SlippageCalculator {
    pub slippage_bps: u32,
}

impl SlippageCalculator {
    pub fn new(slippage_bps: u32) -> Self {
        Self { slippage_bps }
    }

    pub fn compute(&self, trade: &Trade) -> Result<SlippageAdjustedAmounts, MathError> {
        compute_slippage_adjusted_amounts(trade, self.slippage_bps)
    }
}

/// Exact input: output floored to `output * (1 - bps/10000)`.
/// Exact output: input ceiled to `input * (1 + bps/10000)`.
pub fn compute_slippage_adjusted_amounts(
    trade: &Trade,
    slippage_bps: u32,
) -> Result<SlippageAdjustedAmounts, MathError> {
    let (input, output) = match trade.trade_type {
        TradeType::ExactInput => {
            let min_out = calculate_min_out(trade.output_amount.quotient(), slippage_bps);
            (
                trade.input_amount.clone(),
                CurrencyAmount::from_raw(trade.output_amount.token().clone(), min_out),
            )
        }
        TradeType::ExactOutput => {
            let max_in = calculate_max_in(trade.input_amount.quotient(), slippage_bps)?;
            (
                CurrencyAmount::from_raw(trade.input_amount.token().clone(), max_in),
                trade.output_amount.clone(),
            )
        }
    };

    Ok(SlippageAdjustedAmounts {
        input,
        output,
        trade_type: trade.trade_type,
    })
}
