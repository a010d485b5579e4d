//! I/O module
//!
//! Handles the line-oriented input and output of a session.
//!
//! # Components
//!
//! - `transaction_format` - Transaction line parsing, number rendering, balance report
//! - `line_reader` - Line reader with iterator interface over any `BufRead`

pub mod line_reader;
pub mod transaction_format;

pub use line_reader::LineReader;
pub use transaction_format::{format_amount, parse_amount, parse_transaction, write_final_balances};
