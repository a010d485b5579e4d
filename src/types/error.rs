//! Error types for the interactive ledger
//!
//! Two families of errors exist:
//!
//! - [`LedgerError`]: a single transaction could not be applied. Always
//!   recoverable; the session reports it as one `Error: ...` line and moves
//!   on to the next transaction.
//! - [`SessionError`]: the input source itself failed (EOF, unreadable
//!   transaction count, I/O). Fatal; the session stops.
//!
//! An unknown account is neither: it is reported through
//! [`Outcome::NoSuchAccount`](super::Outcome::NoSuchAccount).

use thiserror::Error;

/// Classification of a [`LedgerError`]
///
/// Several variants share one kind; the kind is what callers branch on,
/// the variant decides the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong field count or unknown operation keyword
    MalformedTransaction,
    /// Non-positive or unparseable amount
    InvalidAmount,
    /// Withdrawal exceeds the balance
    InsufficientFunds,
}

/// Per-transaction error
///
/// Messages are what the session prints after `Error: `.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The line did not split into exactly three fields
    #[error("Bad format: {line}")]
    MalformedTransaction {
        /// The raw input line
        line: String,
    },

    /// The operation keyword is not DEPOSIT or WITHDRAW
    #[error("Invalid operation: {operation}")]
    InvalidOperation {
        /// The offending keyword, upper-cased
        operation: String,
    },

    /// The amount field is not a number
    #[error("Invalid number in transaction: {line}")]
    UnparseableAmount {
        /// The raw input line (not just the amount field)
        line: String,
    },

    /// The amount is zero or negative
    ///
    /// Raised by [`Account`](super::Account) without line context; the
    /// engine attaches the raw line with [`LedgerError::with_line`].
    #[error("Amount must be positive{}", line.as_ref().map(|l| format!(" in {}", l)).unwrap_or_default())]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
        /// The raw input line, if known
        line: Option<String>,
    },

    /// Withdrawal larger than the pre-operation balance
    #[error("Insufficient funds in {account}")]
    InsufficientFunds {
        /// Account id
        account: String,
        /// Balance at the time of the check
        balance: f64,
        /// Requested withdrawal amount
        requested: f64,
    },
}

impl LedgerError {
    /// Create a MalformedTransaction error
    pub fn malformed(line: &str) -> Self {
        LedgerError::MalformedTransaction {
            line: line.to_string(),
        }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(operation: &str) -> Self {
        LedgerError::InvalidOperation {
            operation: operation.to_string(),
        }
    }

    /// Create an UnparseableAmount error
    pub fn unparseable_amount(line: &str) -> Self {
        LedgerError::UnparseableAmount {
            line: line.to_string(),
        }
    }

    /// Create an InvalidAmount error without line context
    pub fn invalid_amount(amount: f64) -> Self {
        LedgerError::InvalidAmount { amount, line: None }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: f64, requested: f64) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Attach the raw input line to an error that was raised without one
    ///
    /// Only `InvalidAmount` carries optional line context; every other
    /// variant is returned unchanged.
    pub fn with_line(self, raw: &str) -> Self {
        match self {
            LedgerError::InvalidAmount { amount, line: None } => LedgerError::InvalidAmount {
                amount,
                line: Some(raw.to_string()),
            },
            other => other,
        }
    }

    /// The taxonomy bucket this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::MalformedTransaction { .. } | LedgerError::InvalidOperation { .. } => {
                ErrorKind::MalformedTransaction
            }
            LedgerError::UnparseableAmount { .. } | LedgerError::InvalidAmount { .. } => {
                ErrorKind::InvalidAmount
            }
            LedgerError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
        }
    }
}

/// Fatal error raised by the session's input/output collaborators
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading stdin or writing stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the transaction count was supplied
    #[error("Input ended before the number of transactions was given")]
    MissingTransactionCount,

    /// The transaction count is not a 32-bit integer
    #[error("Invalid number of transactions: '{token}'")]
    InvalidTransactionCount {
        /// The token that failed to parse
        token: String,
    },

    /// Input ended before all announced transactions were read
    #[error("Input ended at line {line} after {received} of {expected} transactions")]
    UnexpectedEof {
        /// Last input line consumed, counting the count line and any blank
        /// lines before it
        line: usize,
        /// Transactions announced by the count line
        expected: usize,
        /// Transaction lines actually read
        received: usize,
    },
}
