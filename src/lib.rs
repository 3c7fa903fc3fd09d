//! Dexgov - DEX trade summaries and governance proposal encoding
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;
pub mod math;
pub mod contracts;

// Re-export main types for convenience
pub use application::{CreateProposalForm, ProposalService, WithdrawService};
pub use domain::amount::{parse_amount, AmountParser};
pub use domain::execution::{SubmissionFlow, SubmissionState, TransactionSender};
pub use domain::liquidity::{LiquiditySummary, Price};
pub use domain::governance::{assemble, ActionEncoder, GovernanceReader, ProposalAction, ProposalDraft, VoteEligibility};
pub use domain::trade::{compute_slippage_adjusted_amounts, Trade, TradeSummary, TradeType};
pub use shared::types::{Currency, CurrencyAmount, Percent, Token};
