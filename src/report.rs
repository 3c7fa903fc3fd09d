// src/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use dexgov::domain::execution::{TransactionRequest, TxHash};
use dexgov::domain::governance::{CreateProposalData, EncodedCall, ProposalButtonState, ProposalDraft, ProposalStatus};
use dexgov::shared::utils::generate_id;
use dexgov::{LiquiditySummary, TradeSummary};

/// Envelope printed for every command
#[derive(Debug, Serialize)]
pub struct Report<T: Serialize> {
    pub id: String,
    pub command: &'static str,
    pub timestamp: DateTime<Utc>,
    pub result: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(command: &'static str, result: T) -> Self {
        Self {
            id: generate_id(),
            command,
            timestamp: Utc::now(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Serialize)]
pub struct AmountReport {
    pub token: String,
    pub input: String,
    /// Base units, decimal
    pub raw: String,
    pub exact: String,
    pub significant: String,
}

#[derive(Debug, Serialize)]
pub struct TradeReport {
    pub slippage_bps: u32,
    pub input: String,
    pub output: String,
    pub summary: TradeSummary,
}

#[derive(Debug, Serialize)]
pub struct LiquidityReport {
    pub pair: String,
    pub summary: LiquiditySummary,
}

#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub action: String,
    pub call: EncodedCall,
}

#[derive(Debug, Serialize)]
pub struct ProposalReport {
    pub governor: String,
    pub draft: ProposalDraft,
    pub propose: CreateProposalData,
    /// Full governor call, selector included
    pub calldata: String,
    pub transaction_hash: Option<TxHash>,
}

#[derive(Debug, Serialize)]
pub struct EligibilityReport {
    pub account: String,
    pub available_votes: Option<String>,
    pub proposal_threshold: Option<String>,
    pub latest_proposal_status: Option<ProposalStatus>,
    pub eligible: bool,
    pub button: ProposalButtonState,
}

#[derive(Debug, Serialize)]
pub struct WithdrawReport {
    pub staking_rewards: String,
    pub summary: &'static str,
    pub button: String,
    pub button_error: bool,
    /// Visible stakes per sub-pool, 4 significant digits
    pub staked: Vec<String>,
    /// Rewards paid out with the withdrawal
    pub claimable: Option<String>,
    pub claiming: Option<String>,
    pub transaction: Option<TransactionRequest>,
    pub transaction_hash: Option<TxHash>,
}
