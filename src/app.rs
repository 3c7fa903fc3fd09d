// src/app.rs
use anyhow::{anyhow, Context, Result};
use ethereum_types::Address;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use dexgov::domain::execution::TransactionBuilder;
use dexgov::domain::governance::{ProposalActionKind, ProposalButtonState};
use dexgov::domain::liquidity::pool_share;
use dexgov::domain::staking::{StakingInfo, WITHDRAW_SUMMARY};
use dexgov::domain::trade::SlippageCalculator;
use dexgov::infrastructure::blockchain::{EthClient, RpcGovernance};
use dexgov::shared::address::{parse_address, to_checksum_address};
use dexgov::shared::types::Percent;
use dexgov::{
    parse_amount, CreateProposalForm, Currency, LiquiditySummary, ProposalService, Trade, TradeSummary,
    TradeType, Token, WithdrawService,
};

use crate::config::{Config, TokenInfo};
use crate::report::{
    AmountReport, EligibilityReport, EncodeReport, LiquidityReport, ProposalReport, Report, TradeReport,
    WithdrawReport,
};
use crate::{ActionArgs, Command, TradeSide};

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub rpc_url: String,
    pub rpc_timeout: Duration,
    pub slippage_bps: u32,
    pub chain_id: u64,
    pub governor: Address,
    pub vote_token: Token,
    pub staking_rewards: Option<Address>,
    pub tokens: Vec<Token>,
}

fn token_from_info(info: &TokenInfo, chain_id: u64) -> Result<Token> {
    let address = parse_address(&info.address).with_context(|| format!("token {}", info.symbol))?;
    let token = Token::new(chain_id, address, info.decimals, info.symbol.clone());
    Ok(match &info.name {
        Some(name) => token.with_name(name.clone()),
        None => token,
    })
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Result<Self> {
        let chain_id = cfg.governance.chain_id;
        let governor = parse_address(&cfg.governance.governor).context("governance.governor")?;
        let vote_token = token_from_info(&cfg.governance.vote_token, chain_id)?;
        let staking_rewards = cfg
            .staking
            .as_ref()
            .map(|s| parse_address(&s.rewards_contract).context("staking.rewards_contract"))
            .transpose()?;
        let tokens = cfg
            .tokens
            .iter()
            .map(|info| token_from_info(info, chain_id))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rpc_url: cfg.rpc.url,
            rpc_timeout: Duration::from_millis(cfg.rpc.timeout_ms),
            slippage_bps: cfg.trade.slippage_bps,
            chain_id,
            governor,
            vote_token,
            staking_rewards,
            tokens,
        })
    }

    /// Look a token up by symbol (case-insensitive) or address
    pub fn token(&self, key: &str) -> Result<Token> {
        let by_address = parse_address(key).ok();
        std::iter::once(&self.vote_token)
            .chain(self.tokens.iter())
            .find(|t| t.symbol.eq_ignore_ascii_case(key) || Some(t.address) == by_address)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown token {}", key))
    }

    /// Like `token`, but `ETH` resolves to the native currency
    pub fn currency(&self, key: &str) -> Result<Currency> {
        if key.eq_ignore_ascii_case("ETH") {
            return Ok(Currency::ether());
        }
        Ok(self.token(key)?.into())
    }

    fn rpc_client(&self) -> Result<Arc<EthClient>> {
        let client = EthClient::new(&self.rpc_url, self.rpc_timeout).context("build RPC client")?;
        Ok(Arc::new(client))
    }

    fn proposal_service(&self) -> Result<ProposalService> {
        let client = self.rpc_client()?;
        let reader = Arc::new(RpcGovernance::new(&client, self.governor, self.vote_token.clone()));
        Ok(ProposalService::new(reader, client, self.governor))
    }

    fn proposal_form(&self, args: &ActionArgs, title: String, body: String) -> Result<CreateProposalForm> {
        let mut form = CreateProposalForm::new(self.vote_token.clone().into());
        form.action = args.action.parse::<ProposalActionKind>()?;
        form.to_address = args.to.clone();
        form.currency = self.currency(&args.token)?;
        form.amount = args.amount.clone();
        form.title = title;
        form.body = body;
        Ok(form)
    }
}

pub async fn run(app_cfg: AppCfg, command: Command) -> Result<()> {
    let output = match command {
        Command::ParseAmount { token, amount } => {
            let token = app_cfg.token(&token)?;
            let parsed = parse_amount(&amount, &token)?;
            Report::new(
                "parse-amount",
                AmountReport {
                    token: token.symbol.clone(),
                    input: amount,
                    raw: parsed.quotient().to_string(),
                    exact: parsed.to_exact(),
                    significant: parsed.to_significant(6),
                },
            )
            .to_json()?
        }
        Command::TradeSummary {
            input_token,
            input_amount,
            output_token,
            output_amount,
            trade_type,
            price_impact_bps,
            via,
        } => {
            let input_token = app_cfg.token(&input_token)?;
            let output_token = app_cfg.token(&output_token)?;
            let input = parse_amount(&input_amount, &input_token)?;
            let output = parse_amount(&output_amount, &output_token)?;
            let trade_type = match trade_type {
                TradeSide::ExactInput => TradeType::ExactInput,
                TradeSide::ExactOutput => TradeType::ExactOutput,
            };

            let mut path = vec![input_token];
            for symbol in &via {
                path.push(app_cfg.token(symbol)?);
            }
            path.push(output_token);

            let mut trade = Trade::new(input.clone(), output.clone(), trade_type).with_path(path);
            if let Some(bps) = price_impact_bps {
                trade = trade.with_price_impact(Percent::from_bps(bps));
            }

            let calculator = SlippageCalculator::new(app_cfg.slippage_bps);
            let summary = TradeSummary::with_calculator(&trade, &calculator)?;
            Report::new(
                "trade-summary",
                TradeReport {
                    slippage_bps: app_cfg.slippage_bps,
                    input: input.to_string(),
                    output: output.to_string(),
                    summary,
                },
            )
            .to_json()?
        }
        Command::LiquiditySummary {
            token_a,
            amount_a,
            token_b,
            amount_b,
            reserve_a,
            reserve_b,
        } => {
            let token_a = app_cfg.token(&token_a)?;
            let token_b = app_cfg.token(&token_b)?;
            let amount_a = parse_amount(&amount_a, &token_a)?;
            let amount_b = parse_amount(&amount_b, &token_b)?;
            let share_a = match reserve_a {
                Some(reserve) => pool_share(&amount_a, &parse_amount(&reserve, &token_a)?),
                None => None,
            };
            let share_b = match reserve_b {
                Some(reserve) => pool_share(&amount_b, &parse_amount(&reserve, &token_b)?),
                None => None,
            };

            let summary = LiquiditySummary::new(&amount_a, &amount_b, None, share_a.as_ref(), share_b.as_ref());
            Report::new(
                "liquidity-summary",
                LiquidityReport {
                    pair: format!("{}/{}", token_a.symbol, token_b.symbol),
                    summary,
                },
            )
            .to_json()?
        }
        Command::EncodeAction(args) => {
            let form = app_cfg.proposal_form(&args, String::new(), String::new())?;
            let action = form.to_action();
            let call = dexgov::ActionEncoder::new().encode(&action)?;
            Report::new(
                "encode-action",
                EncodeReport {
                    action: action.kind().to_string(),
                    call,
                },
            )
            .to_json()?
        }
        Command::Propose {
            action,
            title,
            body,
            from,
            submit,
        } => {
            let creator = parse_address(&from).context("--from")?;
            let form = app_cfg.proposal_form(&action, title, body)?;
            let draft = form.build_draft(creator)?;
            let propose = draft.to_create_proposal_data();

            let transaction_hash = if submit {
                let service = app_cfg.proposal_service()?;
                Some(service.create_proposal(&draft).await?)
            } else {
                info!("Dry run; pass --submit to send the proposal");
                None
            };

            Report::new(
                "propose",
                ProposalReport {
                    governor: to_checksum_address(&app_cfg.governor),
                    calldata: format!("0x{}", hex::encode(propose.calldata())),
                    draft,
                    propose,
                    transaction_hash,
                },
            )
            .to_json()?
        }
        Command::Eligibility { account } => {
            let account = parse_address(&account).context("--account")?;
            let service = app_cfg.proposal_service()?;
            let eligibility = service.read_eligibility(account).await?;
            if let Some(reason) = eligibility.blocked_reason() {
                warn!("{} cannot propose: {}", to_checksum_address(&account), reason);
            }

            Report::new(
                "eligibility",
                EligibilityReport {
                    account: to_checksum_address(&account),
                    available_votes: eligibility.available_votes.as_ref().map(|a| a.to_string()),
                    proposal_threshold: eligibility.proposal_threshold.as_ref().map(|a| a.to_string()),
                    latest_proposal_status: eligibility.latest_proposal_status,
                    eligible: eligibility.is_eligible(),
                    button: ProposalButtonState::new(&eligibility, false),
                },
            )
            .to_json()?
        }
        Command::Withdraw {
            account,
            token,
            staked,
            earned,
            submit,
        } => {
            let staking_rewards = app_cfg
                .staking_rewards
                .ok_or_else(|| anyhow!("[staking] rewards_contract is not configured"))?;
            let token = app_cfg.token(&token)?;
            let account = account
                .as_deref()
                .map(|a| parse_address(a).context("--account"))
                .transpose()?;
            let staking = StakingInfo {
                staking_rewards,
                staked_amounts: staked
                    .iter()
                    .map(|s| parse_amount(s, &token))
                    .collect::<Result<Vec<_>, _>>()?,
                earned_amount: earned
                    .as_deref()
                    .map(|e| parse_amount(e, &app_cfg.vote_token))
                    .transpose()?,
            };

            let transaction = match (staking.withdraw_error(account), account) {
                (None, Some(from)) => Some(TransactionBuilder::new(from).build_exit_transaction(staking_rewards)),
                _ => None,
            };

            let transaction_hash = if submit {
                let service = WithdrawService::new(app_cfg.rpc_client()?);
                Some(service.withdraw(&staking, account).await?)
            } else {
                None
            };

            Report::new(
                "withdraw",
                WithdrawReport {
                    staking_rewards: to_checksum_address(&staking_rewards),
                    summary: WITHDRAW_SUMMARY,
                    button: staking.button_label(account),
                    button_error: staking.button_error(account),
                    staked: staking.visible_stakes().iter().map(|a| a.to_significant(4)).collect(),
                    claimable: staking.claimable(),
                    claiming: staking.claiming_summary(),
                    transaction,
                    transaction_hash,
                },
            )
            .to_json()?
        }
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_cfg() -> AppCfg {
        let cfg = Config::from_toml(
            r#"
            [rpc]
            url = "http://127.0.0.1:8545"
            timeout_ms = 5000

            [governance]
            chain_id = 1
            governor = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"

            [governance.vote_token]
            address = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
            symbol = "FESW"
            decimals = 18
            name = "FeSwap DAO"

            [staking]
            rewards_contract = "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb"

            [[tokens]]
            address = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"
            symbol = "USDC"
            decimals = 6
            "#,
        )
        .unwrap();
        AppCfg::from_config(cfg).unwrap()
    }

    #[test]
    fn test_from_config() {
        let cfg = app_cfg();
        assert_eq!(cfg.rpc_timeout, Duration::from_millis(5000));
        assert_eq!(cfg.slippage_bps, 50);
        assert_eq!(cfg.vote_token.name.as_deref(), Some("FeSwap DAO"));
        assert!(cfg.staking_rewards.is_some());
    }

    #[test]
    fn test_token_lookup() {
        let cfg = app_cfg();
        assert_eq!(cfg.token("usdc").unwrap().decimals, 6);
        assert_eq!(cfg.token("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap().symbol, "FESW");
        assert!(cfg.token("DAI").is_err());
        assert_eq!(cfg.currency("eth").unwrap(), Currency::ether());
    }

    #[test]
    fn test_bad_governor_rejected() {
        let mut cfg = Config::from_toml(
            "[rpc]\nurl = \"x\"\n[governance]\nchain_id = 1\ngovernor = \"0x12\"\n[governance.vote_token]\naddress = \"0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359\"\nsymbol = \"FESW\"\ndecimals = 18\n",
        )
        .unwrap();
        assert!(AppCfg::from_config(cfg.clone()).is_err());
        cfg.governance.governor = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string();
        assert!(AppCfg::from_config(cfg).is_ok());
    }

    #[test]
    fn test_proposal_form_from_args() {
        let cfg = app_cfg();
        let args = ActionArgs {
            action: "approve".to_string(),
            to: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
            token: "USDC".to_string(),
            amount: "2.5".to_string(),
        };
        let form = cfg.proposal_form(&args, "t".to_string(), "b".to_string()).unwrap();
        assert_eq!(form.action, ProposalActionKind::ApproveToken);
        assert!(!form.is_form_invalid());
    }

    #[tokio::test]
    async fn test_liquidity_summary_command() {
        let command = Command::LiquiditySummary {
            token_a: "FESW".to_string(),
            amount_a: "100".to_string(),
            token_b: "USDC".to_string(),
            amount_b: "25".to_string(),
            reserve_a: Some("300".to_string()),
            reserve_b: None,
        };
        assert!(run(app_cfg(), command).await.is_ok());

        let bad_reserve = Command::LiquiditySummary {
            token_a: "FESW".to_string(),
            amount_a: "100".to_string(),
            token_b: "USDC".to_string(),
            amount_b: "25".to_string(),
            reserve_a: None,
            reserve_b: Some("lots".to_string()),
        };
        assert!(run(app_cfg(), bad_reserve).await.is_err());
    }

    #[tokio::test]
    async fn test_withdraw_dry_run_with_earned_rewards() {
        let command = Command::Withdraw {
            account: Some("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string()),
            token: "FESW".to_string(),
            staked: vec!["0".to_string(), "0".to_string()],
            earned: Some("1.5".to_string()),
            submit: false,
        };
        assert!(run(app_cfg(), command).await.is_ok());
    }
}
