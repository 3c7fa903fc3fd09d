//! Common types used across the application

use std::fmt;

use ethereum_types::{Address, U256, U512};
use serde::{Deserialize, Serialize};

use crate::shared::address::to_checksum_address;
use crate::shared::utils::{format_fraction_significant, format_significant, format_units};

/// Fungible token definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: String,
    pub name: Option<String>,
}

impl Token {
    pub fn new(chain_id: u64, address: Address, decimals: u8, symbol: impl Into<String>) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, to_checksum_address(&self.address))
    }
}

/// Anything a user can pick in a currency selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// The chain's gas currency. It has no contract address.
    Native { symbol: String, decimals: u8 },
    Token(Token),
}

impl Currency {
    pub fn ether() -> Self {
        Currency::Native {
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Currency::Native { symbol, .. } => symbol,
            Currency::Token(token) => &token.symbol,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Native { .. } => None,
            Currency::Token(token) => Some(token),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

/// Token amount in base units.
///
/// The quantity is an unsigned 256-bit integer and the decimals come from the
/// token, so the display value is always `quantity / 10^token.decimals`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    token: Token,
    quantity: U256,
}

impl CurrencyAmount {
    pub fn from_raw(token: Token, quantity: U256) -> Self {
        Self { token, quantity }
    }

    pub fn zero(token: Token) -> Self {
        Self::from_raw(token, U256::zero())
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Integer base-unit quantity
    pub fn quotient(&self) -> U256 {
        self.quantity
    }

    pub fn decimals(&self) -> u8 {
        self.token.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Canonical decimal form, parseable back into the same amount
    pub fn to_exact(&self) -> String {
        format_units(self.quantity, self.token.decimals)
    }

    pub fn to_significant(&self, digits: usize) -> String {
        format_significant(self.quantity, self.token.decimals, digits)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token.symbol)
    }
}

/// Exact fraction used for percentages such as price impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    numerator: U256,
    denominator: U256,
}

impl Percent {
    pub fn new(numerator: U256, denominator: U256) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    pub fn from_bps(bps: u32) -> Self {
        Self {
            numerator: U256::from(bps),
            denominator: U256::from(10_000u32),
        }
    }

    pub fn less_than(&self, other: &Percent) -> bool {
        self.numerator.full_mul(other.denominator) < other.numerator.full_mul(self.denominator)
    }

    pub fn greater_than(&self, other: &Percent) -> bool {
        other.less_than(self)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Percentage with `digits` significant digits, rounding half up: `1/3` -> `"33.33"`
    pub fn to_significant(&self, digits: usize) -> String {
        let numerator = U512::from(self.numerator) * U512::from(100u8);
        // denominator is never zero
        format_fraction_significant(numerator, U512::from(self.denominator), digits).unwrap_or_default()
    }

    /// Percentage with `places` decimals, rounding half up: `0.0123` -> `"1.23"`
    pub fn to_fixed(&self, places: u32) -> String {
        let scale = U512::from(10u8).pow(U512::from(places));
        let hundred = U512::from(100u8);
        let numerator = U512::from(self.numerator) * hundred * scale;
        let denominator = U512::from(self.denominator);

        let scaled = (numerator + denominator / 2) / denominator;
        let whole = scaled / scale;
        let frac = scaled % scale;

        if places == 0 {
            whole.to_string()
        } else {
            format!("{}.{:0>width$}", whole, frac.to_string(), width = places as usize)
        }
    }
}
