//! Exchange rate between two tokens

use ethereum_types::{U256, U512};

use crate::shared::types::{CurrencyAmount, Token};
use crate::shared::utils::{format_fraction_significant, pow10};

/// Quote tokens per base token, held as a raw base-unit ratio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub base: Token,
    pub quote: Token,
    /// Base units of `base`
    denominator: U256,
    /// Base units of `quote`
    numerator: U256,
}

impl Price {
    pub fn new(base: Token, quote: Token, denominator: U256, numerator: U256) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        Some(Self {
            base,
            quote,
            denominator,
            numerator,
        })
    }

    /// Rate implied by depositing `base_amount` alongside `quote_amount`
    pub fn from_amounts(base_amount: &CurrencyAmount, quote_amount: &CurrencyAmount) -> Option<Self> {
        Self::new(
            base_amount.token().clone(),
            quote_amount.token().clone(),
            base_amount.quotient(),
            quote_amount.quotient(),
        )
    }

    /// `None` when the rate is zero
    pub fn invert(&self) -> Option<Self> {
        Self::new(self.quote.clone(), self.base.clone(), self.numerator, self.denominator)
    }

    /// Whole-token rate with `digits` significant digits, rounding half up
    pub fn to_significant(&self, digits: usize) -> Option<String> {
        let numerator = U512::from(self.numerator).checked_mul(U512::from(pow10(self.base.decimals)?))?;
        let denominator = U512::from(self.denominator).checked_mul(U512::from(pow10(self.quote.decimals)?))?;
        format_fraction_significant(numerator, denominator, digits)
    }
}
