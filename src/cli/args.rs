use crate::session::SessionConfig;
use clap::{ArgAction, Parser};

/// Apply deposits and withdrawals read from standard input to a fixed set of accounts
#[derive(Parser, Debug)]
#[command(name = "interactive-ledger")]
#[command(about = "Apply deposits and withdrawals read from standard input", long_about = None)]
pub struct CliArgs {
    /// Do not print the input prompts
    #[arg(
        long = "no-prompt",
        help = "Suppress the 'Enter ...' prompts (useful when piping input)"
    )]
    pub no_prompt: bool,

    /// Log verbosity, repeatable
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            prompts: !self.no_prompt,
        }
    }

    /// Default log filter directive for the requested verbosity
    ///
    /// `RUST_LOG`, when set, takes precedence over this value.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
