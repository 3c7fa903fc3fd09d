mod app;
mod config;
mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "DEX trade summaries and governance proposals from the command line")]
struct Cli {
    /// Path to config file
    #[arg(long, default_value = "dexgov.toml")]
    config: PathBuf,

    /// RPC endpoint URL (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Slippage tolerance in basis points (overrides config)
    #[arg(long)]
    slippage_bps: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a decimal amount into base units of a token
    ParseAmount {
        #[arg(long)]
        token: String,
        amount: String,
    },
    /// Slippage bound, price impact and route of a quoted trade
    TradeSummary {
        #[arg(long)]
        input_token: String,
        #[arg(long)]
        input_amount: String,
        #[arg(long)]
        output_token: String,
        #[arg(long)]
        output_amount: String,
        #[arg(long, value_enum, default_value_t = TradeSide::ExactInput)]
        trade_type: TradeSide,
        #[arg(long)]
        price_impact_bps: Option<u32>,
        /// Intermediate tokens, comma-separated
        #[arg(long, value_delimiter = ',')]
        via: Vec<String>,
    },
    /// Confirmation rows for supplying liquidity to a pair
    LiquiditySummary {
        #[arg(long)]
        token_a: String,
        #[arg(long)]
        amount_a: String,
        #[arg(long)]
        token_b: String,
        #[arg(long)]
        amount_b: String,
        /// Current reserve of the A-to-B sub-pool, in token A
        #[arg(long)]
        reserve_a: Option<String>,
        /// Current reserve of the B-to-A sub-pool, in token B
        #[arg(long)]
        reserve_b: Option<String>,
    },
    /// Encode a single proposal action
    EncodeAction(ActionArgs),
    /// Assemble a proposal and optionally submit it to the governor
    Propose {
        #[command(flatten)]
        action: ActionArgs,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        /// Proposer account
        #[arg(long)]
        from: String,
        /// Send eth_sendTransaction instead of printing the draft only
        #[arg(long)]
        submit: bool,
    },
    /// Check whether an account may create a proposal
    Eligibility {
        #[arg(long)]
        account: String,
    },
    /// Withdraw staked liquidity and claim rewards
    Withdraw {
        #[arg(long)]
        account: Option<String>,
        /// Staked token symbol or address
        #[arg(long)]
        token: String,
        /// Staked amount per sub-pool, repeatable
        #[arg(long)]
        staked: Vec<String>,
        /// Unclaimed rewards in the governance token
        #[arg(long)]
        earned: Option<String>,
        #[arg(long)]
        submit: bool,
    },
}

#[derive(Args, Debug)]
pub struct ActionArgs {
    /// "transfer" or "approve"
    #[arg(long, default_value = "transfer")]
    pub action: String,
    /// Recipient or spender
    #[arg(long)]
    pub to: String,
    /// Token symbol or address
    #[arg(long)]
    pub token: String,
    #[arg(long)]
    pub amount: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TradeSide {
    ExactInput,
    ExactOutput,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    // Priority: CLI args > Config file > Defaults
    let base_config = config::Config::from_file(&cli.config)?;
    let mut app_cfg = app::AppCfg::from_config(base_config)?;

    if let Some(rpc_url) = cli.rpc_url {
        app_cfg.rpc_url = rpc_url;
    }
    if let Some(slippage_bps) = cli.slippage_bps {
        app_cfg.slippage_bps = slippage_bps;
    }

    app::run(app_cfg, cli.command).await
}
