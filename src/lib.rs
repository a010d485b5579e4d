//! Interactive Ledger Library
//! # Overview
//!
//! This library provides a line-oriented ledger that applies deposits and
//! withdrawals to a small, fixed set of in-memory accounts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Command, Outcome, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Command execution against the account table
//!   - [`core::account_table`] - The fixed, ordered set of accounts
//! - [`io`] - Transaction line parsing, number rendering and line input
//! - [`session`] - The prompt / read / process / report loop
//!
//! # Transaction Format
//!
//! One transaction per line: `<accountId>,<operation>,<amount>`, where the
//! operation is `DEPOSIT` or `WITHDRAW` (case-insensitive).
//!
//! # Outcomes
//!
//! Every transaction produces exactly one output line:
//!
//! - `Processed: <id> <OP> <amount> -> <newBalance>`
//! - `No such account: <id>`
//! - `Error: <message>`
//!
//! A failed transaction never changes a balance and never stops the session.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{AccountTable, TransactionEngine};
pub use io::parse_transaction;
pub use session::{InteractiveSession, SessionConfig, SessionStats};
pub use types::{
    Account, AccountId, Command, ErrorKind, LedgerError, Operation, Outcome, Receipt,
    SessionError,
};
