//! Trade domain - slippage bounds and swap detail summaries
//!
//! Routing and AMM math live in the external SDK. A `Trade` here is a
//! read-only snapshot of what that SDK produced.

mod slippage;
mod summary;

pub use slippage::{compute_slippage_adjusted_amounts, SlippageAdjustedAmounts, SlippageCalculator};
pub use summary::{format_price_impact, warning_severity, TradeSummary};

use serde::{Deserialize, Serialize};

use crate::shared::types::{CurrencyAmount, Percent, Token};

/// Which side of the trade the user fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// Quoted swap, as handed over by the routing provider
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
    pub trade_type: TradeType,
    /// Token path from input to output, both ends included
    pub path: Vec<Token>,
    pub price_impact: Option<Percent>,
}

impl Trade {
    pub fn new(
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
        trade_type: TradeType,
    ) -> Self {
        let path = vec![input_amount.token().clone(), output_amount.token().clone()];
        Self {
            input_amount,
            output_amount,
            trade_type,
            path,
            price_impact: None,
        }
    }

    pub fn with_path(mut self, path: Vec<Token>) -> Self {
        self.path = path;
        self
    }

    pub fn with_price_impact(mut self, price_impact: Percent) -> Self {
        self.price_impact = Some(price_impact);
        self
    }

    pub fn is_exact_input(&self) -> bool {
        self.trade_type == TradeType::ExactInput
    }
}
