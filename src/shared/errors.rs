//! Error handling for the application

use ethers::providers::ProviderError;
use ethers::providers::RpcError as _;
use thiserror::Error;

/// Amount parsing errors (user typed something that is not a token amount)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount must not be negative: {0}")]
    Negative(String),

    #[error("Amount is not a decimal number: {0}")]
    NotNumeric(String),

    #[error("Amount exceeds the representable range for {decimals} decimals: {input}")]
    Overflow { input: String, decimals: u8 },
}

/// Proposal action encoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Native currency cannot be used in a proposal action")]
    NativeCurrency,

    #[error("Unsupported proposal action: {0}")]
    UnsupportedAction(String),
}

/// Proposal assembly errors (a required field is missing)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Proposal must contain at least one action")]
    NoActions,

    #[error("Proposal title is empty")]
    EmptyTitle,

    #[error("Proposal body is empty")]
    EmptyBody,
}

/// Transaction submission errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("A submission is already in progress")]
    AlreadyAttempting,

    #[error("Not eligible to submit: {0}")]
    NotEligible(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Node transport and contract call errors
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Invalid RPC url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Contract call {method} failed: {reason}")]
    Contract { method: &'static str, reason: String },
}

/// Arithmetic errors from fixed-point bound computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Result does not fit into 256 bits")]
    Overflow,
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Blockchain error: {0}")]
    BlockchainError(String),

    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl From<RpcError> for AppError {
    fn from(err: RpcError) -> Self {
        AppError::BlockchainError(err.to_string())
    }
}

impl From<RpcError> for SubmissionError {
    fn from(err: RpcError) -> Self {
        match &err {
            // Wallet refusals come back as JSON-RPC error objects
            RpcError::Provider(provider) => match provider.as_error_response() {
                Some(response) => SubmissionError::Rejected(response.message.clone()),
                None => SubmissionError::NetworkError(err.to_string()),
            },
            _ => SubmissionError::NetworkError(err.to_string()),
        }
    }
}
