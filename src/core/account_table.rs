//! Account table module
//!
//! This module provides the `AccountTable` which holds the fixed set of
//! accounts for a session.
//!
//! The AccountTable is responsible for:
//! - Seeding the opening accounts (`A1001` and `A1002` by default)
//! - Resolving account ids to accounts
//! - Listing accounts in creation order for the final balance report
//!
//! There is no way to add or remove accounts once the table is built.

use crate::types::Account;

/// Opening accounts of a default session, in creation order
pub const OPENING_BALANCES: [(&str, f64); 2] = [("A1001", 500.0), ("A1002", 100.0)];

/// Fixed, ordered set of accounts
///
/// Backed by a vector so iteration follows creation order. Lookups are
/// linear, which is fine for a handful of accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountTable {
    accounts: Vec<Account>,
}

impl AccountTable {
    /// Build a table from an explicit list of accounts
    ///
    /// If two accounts share an id, the first one shadows the second.
    pub fn new(accounts: Vec<Account>) -> Self {
        AccountTable { accounts }
    }

    /// Build the default table seeded from [`OPENING_BALANCES`]
    pub fn with_opening_balances() -> Self {
        Self::new(
            OPENING_BALANCES
                .iter()
                .map(|&(id, balance)| Account::new(id, balance))
                .collect(),
        )
    }

    /// Look up an account by id
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Look up an account by id for mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountTable {
    fn default() -> Self {
        Self::with_opening_balances()
    }
}
