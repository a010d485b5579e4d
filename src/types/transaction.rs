//! Transaction-related types for the interactive ledger
//!
//! This module defines the account identifier, the operation vocabulary and
//! the parsed command handed from the parser to the engine.

use super::error::LedgerError;
use std::fmt;

/// Account identifier
///
/// Taken verbatim (after trimming) from the first field of a transaction
/// line. Resolution against the account table happens in the engine.
pub type AccountId = String;

/// Operations supported by the ledger
///
/// Displays as the upper-case keyword used on the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires the pre-operation balance to cover the amount.
    Withdraw,
}

impl Operation {
    /// Match an already upper-cased keyword against the operation vocabulary
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "DEPOSIT" => Some(Operation::Deposit),
            "WITHDRAW" => Some(Operation::Withdraw),
            _ => None,
        }
    }

    /// The keyword for this operation as it appears in input and output
    pub fn keyword(self) -> &'static str {
        match self {
            Operation::Deposit => "DEPOSIT",
            Operation::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed transaction command
///
/// Produced by [`crate::io::parse_transaction`] and immutable afterwards.
/// The operation keyword is kept as text and resolved by the engine once the
/// account is known, so an unknown account is reported before an unknown
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// The account this command targets (not yet resolved)
    pub account_id: AccountId,

    /// Upper-cased operation keyword, not yet validated
    pub keyword: String,

    /// Amount as parsed from the line; sign is validated by the account
    pub amount: f64,
}

impl Command {
    pub fn new(account_id: impl Into<AccountId>, keyword: impl ToString, amount: f64) -> Self {
        Command {
            account_id: account_id.into(),
            keyword: keyword.to_string(),
            amount,
        }
    }

    /// Resolve the keyword against the operation vocabulary
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` citing the keyword if it is neither
    /// DEPOSIT nor WITHDRAW.
    pub fn operation(&self) -> Result<Operation, LedgerError> {
        Operation::from_keyword(&self.keyword)
            .ok_or_else(|| LedgerError::invalid_operation(&self.keyword))
    }
}
