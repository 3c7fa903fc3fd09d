use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_slippage_bps() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcCfg {
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceCfg {
    pub chain_id: u64,
    pub governor: String,
    pub vote_token: TokenInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TradeCfg {
    #[serde(default = "default_slippage_bps")]
    pub slippage_bps: u32,
}

impl Default for TradeCfg {
    fn default() -> Self {
        Self {
            slippage_bps: default_slippage_bps(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StakingCfg {
    pub rewards_contract: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub rpc: RpcCfg,
    pub governance: GovernanceCfg,
    #[serde(default)]
    pub trade: TradeCfg,
    pub staking: Option<StakingCfg>,
    #[serde(default)]
    pub tokens: Vec<TokenInfo>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).context("parse dexgov config")?;
        Ok(cfg)
    }
}
