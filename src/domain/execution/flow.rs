//! Submission state machine: `Idle -> Attempting -> Submitted(hash) | Idle`

use tracing::{debug, warn};

use crate::shared::errors::SubmissionError;
use super::TxHash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Attempting,
    Submitted(TxHash),
}

/// Identifies one attempt, so results of a dismissed attempt can be dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// One outstanding submission per session
#[derive(Debug)]
pub struct SubmissionFlow {
    state: SubmissionState,
    attempts: u64,
    tracked: Option<u64>,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            attempts: 0,
            tracked: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_attempting(&self) -> bool {
        self.state == SubmissionState::Attempting
    }

    pub fn hash(&self) -> Option<TxHash> {
        match self.state {
            SubmissionState::Submitted(hash) => Some(hash),
            _ => None,
        }
    }

    /// User confirmed. A previous `Submitted` result is replaced by the new attempt.
    pub fn confirm(&mut self) -> Result<SubmissionTicket, SubmissionError> {
        if self.is_attempting() {
            return Err(SubmissionError::AlreadyAttempting);
        }
        self.attempts += 1;
        self.tracked = Some(self.attempts);
        self.state = SubmissionState::Attempting;
        debug!("Submission attempt {} started", self.attempts);
        Ok(SubmissionTicket(self.attempts))
    }

    /// Returns false when the result belongs to an attempt no longer tracked
    pub fn resolve(&mut self, ticket: SubmissionTicket, hash: TxHash) -> bool {
        if !self.tracks(ticket) {
            debug!("Ignoring result of untracked attempt {}", ticket.0);
            return false;
        }
        self.tracked = None;
        self.state = SubmissionState::Submitted(hash);
        true
    }

    pub fn reject(&mut self, ticket: SubmissionTicket, error: &SubmissionError) -> bool {
        if !self.tracks(ticket) {
            return false;
        }
        warn!("Submission attempt {} failed: {}", ticket.0, error);
        self.tracked = None;
        self.state = SubmissionState::Idle;
        true
    }

    /// Stop tracking. An in-flight request is not cancelled.
    pub fn dismiss(&mut self) {
        self.tracked = None;
        self.state = SubmissionState::Idle;
    }

    fn tracks(&self, ticket: SubmissionTicket) -> bool {
        self.is_attempting() && self.tracked == Some(ticket.0)
    }
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut flow = SubmissionFlow::new();
        assert_eq!(flow.state(), &SubmissionState::Idle);

        let ticket = flow.confirm().unwrap();
        assert!(flow.is_attempting());

        assert!(flow.resolve(ticket, TxHash::repeat_byte(0xaa)));
        assert_eq!(flow.state(), &SubmissionState::Submitted(TxHash::repeat_byte(0xaa)));
        assert_eq!(flow.hash(), Some(TxHash::repeat_byte(0xaa)));
    }

    #[test]
    fn test_reject_returns_to_idle_without_hash() {
        let mut flow = SubmissionFlow::new();
        let ticket = flow.confirm().unwrap();

        assert!(flow.reject(ticket, &SubmissionError::Rejected("user denied".into())));
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert!(flow.hash().is_none());
    }

    #[test]
    fn test_no_concurrent_attempts() {
        let mut flow = SubmissionFlow::new();
        flow.confirm().unwrap();
        assert_eq!(flow.confirm(), Err(SubmissionError::AlreadyAttempting));
    }

    #[test]
    fn test_dismissed_attempt_result_is_dropped() {
        let mut flow = SubmissionFlow::new();
        let first = flow.confirm().unwrap();
        flow.dismiss();
        assert_eq!(flow.state(), &SubmissionState::Idle);

        // late result for the dismissed attempt
        assert!(!flow.resolve(first, TxHash::repeat_byte(0x01)));
        assert_eq!(flow.state(), &SubmissionState::Idle);

        let second = flow.confirm().unwrap();
        assert!(!flow.resolve(first, TxHash::repeat_byte(0x01)));
        assert!(flow.is_attempting());
        assert!(flow.resolve(second, TxHash::repeat_byte(0x02)));
        assert_eq!(flow.hash(), Some(TxHash::repeat_byte(0x02)));
    }

    #[test]
    fn test_confirm_after_submitted_starts_fresh_attempt() {
        let mut flow = SubmissionFlow::new();
        let ticket = flow.confirm().unwrap();
        flow.resolve(ticket, TxHash::repeat_byte(0x03));

        flow.confirm().unwrap();
        assert!(flow.hash().is_none());
    }
}
