//! Interactive session loop
//!
//! Orchestrates one run of the ledger by coordinating the [`LineReader`]
//! (input), the [`TransactionEngine`] (business logic) and the output
//! writer.
//!
//! # Flow
//!
//! 1. Prompt for and read the transaction count N
//! 2. N times: prompt, read one line, process it, print exactly one line
//! 3. Print the final balances in account creation order
//!
//! Transaction-level failures never stop the loop. Only input failures
//! (missing or invalid count, EOF before the N-th line, I/O errors) end the
//! session early, in which case no final balances are printed.

use super::{SessionConfig, SessionStats};
use crate::core::TransactionEngine;
use crate::io::{write_final_balances, LineReader};
use crate::types::SessionError;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompt shown before the transaction count is read
pub const COUNT_PROMPT: &str = "Enter number of transactions:";

/// Prompt shown before each transaction line is read
pub const TRANSACTION_PROMPT: &str =
    "Enter transaction (format: <accountId>,<operation>,<amount>):";

/// A single-threaded interactive ledger session
///
/// # Examples
///
/// ```
/// use interactive_ledger::session::{InteractiveSession, SessionConfig};
///
/// let input = "1\nA1001,DEPOSIT,200\n";
/// let mut output = Vec::new();
///
/// let mut session = InteractiveSession::new(SessionConfig { prompts: false });
/// session.run(input.as_bytes(), &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.starts_with("Processed: A1001 DEPOSIT 200.0 -> 700.0\n"));
/// ```
#[derive(Debug)]
pub struct InteractiveSession {
    engine: TransactionEngine,
    config: SessionConfig,
}

impl InteractiveSession {
    /// Create a session over the default opening accounts
    pub fn new(config: SessionConfig) -> Self {
        Self::with_engine(TransactionEngine::new(), config)
    }

    /// Create a session around an existing engine
    pub fn with_engine(engine: TransactionEngine, config: SessionConfig) -> Self {
        InteractiveSession { engine, config }
    }

    /// Run the session to completion
    ///
    /// # Arguments
    ///
    /// * `input` - Source of the count line and transaction lines
    /// * `output` - Sink for prompts, per-transaction lines and final balances
    ///
    /// # Returns
    ///
    /// * `Ok(SessionStats)` once the final balances have been written
    /// * `Err(SessionError)` if the input ran out or could not be read, or
    ///   output could not be written
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        output: &mut dyn Write,
    ) -> Result<SessionStats, SessionError> {
        let mut reader = LineReader::new(input);

        self.prompt(output, COUNT_PROMPT)?;
        let count = reader.read_count()?;
        // A negative count runs no iterations
        let expected = usize::try_from(count).unwrap_or(0);
        debug!(count, "starting session");

        let mut stats = SessionStats::default();
        for received in 0..expected {
            self.prompt(output, TRANSACTION_PROMPT)?;

            let line = match reader.next() {
                Some(line) => line?,
                None => {
                    return Err(SessionError::UnexpectedEof {
                        line: reader.line_number(),
                        expected,
                        received,
                    })
                }
            };

            match self.engine.process_line(&line) {
                Ok(outcome) => {
                    stats.record(&outcome);
                    writeln!(output, "{}", outcome)?;
                }
                Err(e) => {
                    stats.rejected += 1;
                    debug!(line = reader.line_number(), error = %e, "transaction rejected");
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }

        write_final_balances(self.engine.accounts().accounts(), output)?;

        info!(
            processed = stats.processed,
            skipped = stats.skipped,
            rejected = stats.rejected,
            "session complete"
        );
        Ok(stats)
    }

    fn prompt(&self, output: &mut dyn Write, text: &str) -> std::io::Result<()> {
        if self.config.prompts {
            writeln!(output, "{}", text)?;
            output.flush()?;
        }
        Ok(())
    }

    /// The engine, with balances as they stand
    pub fn engine(&self) -> &TransactionEngine {
        &self.engine
    }
}
