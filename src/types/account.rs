//! Account-related types for the interactive ledger
//!
//! This module defines the Account structure and the two balance operations
//! it supports. Validation always runs before the balance is touched, so a
//! rejected operation leaves the account exactly as it was.

use super::error::LedgerError;
use super::transaction::AccountId;

/// Account state
///
/// Created once when the session starts and never destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account identifier (e.g. `A1001`)
    pub id: AccountId,

    /// Current balance
    pub balance: f64,
}

impl Account {
    /// Create an account with the given opening balance
    pub fn new(id: impl Into<AccountId>, balance: f64) -> Self {
        Account {
            id: id.into(),
            balance,
        }
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `amount <= 0`. The balance is unchanged.
    pub fn deposit(&mut self, amount: f64) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::invalid_amount(amount));
        }

        self.balance += amount;
        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// The funds check uses the balance before the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount <= 0` (`InvalidAmount`)
    /// - the balance is lower than `amount` (`InsufficientFunds`)
    pub fn withdraw(&mut self, amount: f64) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::invalid_amount(amount));
        }

        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(
                &self.id,
                self.balance,
                amount,
            ));
        }

        self.balance -= amount;
        Ok(())
    }
}
