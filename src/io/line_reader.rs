//! Line-oriented input reader with iterator interface
//!
//! Wraps any [`BufRead`] (stdin in production, byte slices in tests) and
//! yields input lines with their line terminator removed.
//!
//! ```no_run
//! use interactive_ledger::io::LineReader;
//! use std::io;
//!
//! let mut reader = LineReader::new(io::stdin().lock());
//! let count = reader.read_count().unwrap();
//! for line in reader.take(count.max(0) as usize) {
//!     println!("{}", line.unwrap());
//! }
//! ```
//!
//! # Error Handling
//!
//! - I/O failures are yielded as `Err(SessionError::Io)`
//! - Invalid UTF-8 is not an error: offending bytes become U+FFFD and the
//!   line is handed on, so a garbled line fails as a single transaction
//! - End of input ends the iteration; callers decide whether that is fatal

use crate::types::SessionError;
use std::io::BufRead;

/// Streaming line reader
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line_num: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
        }
    }

    /// Read the transaction count
    ///
    /// Blank lines are skipped. The count is the first whitespace-separated
    /// token of the first non-blank line; the rest of that line is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - input ends before a non-blank line (`MissingTransactionCount`)
    /// - the token is not a 32-bit integer (`InvalidTransactionCount`)
    /// - reading fails (`Io`)
    pub fn read_count(&mut self) -> Result<i32, SessionError> {
        for line in self.by_ref() {
            let line = line?;
            if let Some(token) = line.split_whitespace().next() {
                return token
                    .parse()
                    .map_err(|_| SessionError::InvalidTransactionCount {
                        token: token.to_string(),
                    });
            }
        }

        Err(SessionError::MissingTransactionCount)
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_num
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, SessionError>;

    /// Read the next line
    ///
    /// # Returns
    ///
    /// * `Some(Ok(line))` - the line without its `\n` or `\r\n` terminator,
    ///   decoded lossily
    /// * `Some(Err(..))` - the underlying reader failed
    /// * `None` - end of input
    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_num += 1;
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
