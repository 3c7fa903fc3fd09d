//! Liquidity domain - the confirmation shown before supplying to a pair
//!
//! A pair holds two sub-pools, one per swap direction, so a deposit carries a
//! separate pool share for each side.

mod price;
mod summary;

pub use price::Price;
pub use summary::{pool_share, DepositRow, LiquiditySummary, ShareRow, CONFIRM_SUPPLY};
