//! Interactive Ledger CLI
//!
//! Reads a transaction count and that many transaction lines from stdin,
//! applies them to the opening accounts and prints the final balances.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! printf '2\nA1001,DEPOSIT,200\nA1002,WITHDRAW,150\n' | cargo run -- --no-prompt
//! RUST_LOG=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Session completed (individual transaction errors are reported, not fatal)
//! - 1: Input failure (missing or invalid count, input ended early, I/O error)

use interactive_ledger::cli;
use interactive_ledger::session::InteractiveSession;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing(&args);

    let mut session = InteractiveSession::new(args.to_session_config());

    let input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if let Err(e) = session.run(input, &mut output) {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
