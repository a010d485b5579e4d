//! Transaction processing engine
//!
//! This module provides the TransactionEngine that executes parsed commands
//! against the account table it owns.
//!
//! The engine enforces the following rules:
//! - Unknown account ids are skipped, never treated as failures
//! - Validation happens inside the account before any balance changes
//! - Every command is a single attempt; nothing is retried or rolled back

use crate::core::account_table::AccountTable;
use crate::io::parse_transaction;
use crate::types::{Account, Command, LedgerError, Operation, Outcome, Receipt};
use tracing::{debug, info};

/// Transaction processing engine
///
/// Owns the account table for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct TransactionEngine {
    accounts: AccountTable,
}

impl TransactionEngine {
    /// Create an engine over the default opening accounts
    pub fn new() -> Self {
        Self::with_accounts(AccountTable::with_opening_balances())
    }

    /// Create an engine over an explicit account table
    pub fn with_accounts(accounts: AccountTable) -> Self {
        TransactionEngine { accounts }
    }

    /// Parse and execute one raw transaction line
    ///
    /// Non-positive amounts rejected by the account are reported with the
    /// raw line attached.
    ///
    /// # Errors
    ///
    /// Returns any parse error from [`parse_transaction`] or execution
    /// error from [`TransactionEngine::execute`].
    pub fn process_line(&mut self, raw: &str) -> Result<Outcome, LedgerError> {
        let command = parse_transaction(raw)?;
        self.execute(&command).map_err(|e| e.with_line(raw))
    }

    /// Execute a parsed command
    ///
    /// Resolves the account first, then the operation keyword, then
    /// dispatches. An unknown account therefore wins over an unknown
    /// operation, and an unknown operation wins over a non-positive amount.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome::Processed(..))` if the balance was updated
    /// * `Ok(Outcome::NoSuchAccount { .. })` if the account id is unknown
    /// * `Err(LedgerError)` if the keyword is unknown or the account rejected
    ///   the operation
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, LedgerError> {
        let Some(account) = self.accounts.get_mut(&command.account_id) else {
            info!(account = %command.account_id, "skipping transaction for unknown account");
            return Ok(Outcome::NoSuchAccount {
                account_id: command.account_id.clone(),
            });
        };

        let operation = command.operation().inspect_err(|e| {
            info!(account = %account.id, error = %e, "operation rejected");
        })?;

        match operation {
            Operation::Deposit => Self::process_deposit(account, command.amount)?,
            Operation::Withdraw => Self::process_withdrawal(account, command.amount)?,
        }

        debug!(
            account = %account.id,
            operation = %operation,
            amount = command.amount,
            balance = account.balance,
            "transaction processed"
        );

        Ok(Outcome::Processed(Receipt {
            account_id: account.id.clone(),
            operation,
            amount: command.amount,
            new_balance: account.balance,
        }))
    }

    fn process_deposit(account: &mut Account, amount: f64) -> Result<(), LedgerError> {
        account.deposit(amount).inspect_err(|e| {
            info!(account = %account.id, amount, error = %e, "deposit rejected");
        })
    }

    fn process_withdrawal(account: &mut Account, amount: f64) -> Result<(), LedgerError> {
        let balance = account.balance;
        account.withdraw(amount).inspect_err(|e| {
            info!(account = %account.id, amount, balance, error = %e, "withdrawal rejected");
        })
    }

    /// The account table in its current state
    pub fn accounts(&self) -> &AccountTable {
        &self.accounts
    }
}
