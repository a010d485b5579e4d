//! Core business logic module
//!
//! This module contains the transaction processing components:
//! - `engine` - Command execution against the account table
//! - `account_table` - The fixed, ordered set of session accounts

pub mod account_table;
pub mod engine;

pub use account_table::{AccountTable, OPENING_BALANCES};
pub use engine::TransactionEngine;
