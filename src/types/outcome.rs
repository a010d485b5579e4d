//! Transaction outcomes
//!
//! An outcome exists only long enough to produce one output line. Failures
//! are not outcomes; they travel as [`LedgerError`](super::LedgerError).

use super::transaction::{AccountId, Operation};
use crate::io::format_amount;
use std::fmt;

/// Record of a successfully applied transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub account_id: AccountId,
    pub operation: Operation,
    pub amount: f64,
    /// Balance after the operation was applied
    pub new_balance: f64,
}

/// Result of executing a command that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The operation was applied
    Processed(Receipt),

    /// The account id is not in the table; the transaction was skipped
    ///
    /// This is informational and never counts as a failure.
    NoSuchAccount { account_id: AccountId },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Processed(receipt) => write!(
                f,
                "Processed: {} {} {} -> {}",
                receipt.account_id,
                receipt.operation,
                format_amount(receipt.amount),
                format_amount(receipt.new_balance)
            ),
            Outcome::NoSuchAccount { account_id } => {
                write!(f, "No such account: {}", account_id)
            }
        }
    }
}
