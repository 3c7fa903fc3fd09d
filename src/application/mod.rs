//! Application layer - use cases and services

pub mod create_proposal;
pub mod services;

pub use create_proposal::CreateProposalForm;
pub use services::{ProposalService, WithdrawService};
