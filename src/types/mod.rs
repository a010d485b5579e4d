//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account and its balance operations
//! - `transaction`: account ids, operations and parsed commands
//! - `outcome`: successful transaction outcomes
//! - `error`: per-transaction and session-level errors

pub mod account;
pub mod error;
pub mod outcome;
pub mod transaction;

pub use account::Account;
pub use error::{ErrorKind, LedgerError, SessionError};
pub use outcome::{Outcome, Receipt};
pub use transaction::{AccountId, Command, Operation};
