//! Session module
//!
//! Drives a complete ledger session: read the transaction count, process
//! that many transaction lines, then report final balances.

pub mod interactive;

pub use interactive::{InteractiveSession, COUNT_PROMPT, TRANSACTION_PROMPT};

use crate::types::Outcome;

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the count and per-transaction prompts
    pub prompts: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { prompts: true }
    }
}

/// Per-session transaction counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Transactions applied to an account
    pub processed: usize,
    /// Transactions skipped because the account does not exist
    pub skipped: usize,
    /// Transactions rejected with an error
    pub rejected: usize,
}

impl SessionStats {
    /// Count a successful outcome
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Processed(_) => self.processed += 1,
            Outcome::NoSuchAccount { .. } => self.skipped += 1,
        }
    }

    /// Total transactions seen
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.rejected
    }
}
