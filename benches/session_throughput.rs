//! Benchmark suite for transaction line processing
//!
//! Uses the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! The generated inputs mix deposits, withdrawals, unknown accounts and
//! malformed lines so every outcome path is exercised.

use interactive_ledger::session::{InteractiveSession, SessionConfig};
use interactive_ledger::{parse_transaction, TransactionEngine};

fn main() {
    divan::main();
}

const LINES: [&str; 6] = [
    "A1001,DEPOSIT,200",
    "A1001,WITHDRAW,150.5",
    "A1002, deposit ,12.25",
    "A9999,DEPOSIT,50",
    "A1002,WITHDRAW,1e9",
    "A1001,FLY,10",
];

fn session_input(transactions: usize) -> String {
    let mut input = format!("{}\n", transactions);
    for line in LINES.iter().cycle().take(transactions) {
        input.push_str(line);
        input.push('\n');
    }
    input
}

/// Parse a single well-formed line
#[divan::bench]
fn parse_valid_line() {
    divan::black_box(parse_transaction(divan::black_box("A1001,DEPOSIT,200"))).ok();
}

/// Parse a line that fails the amount check
#[divan::bench]
fn parse_invalid_number() {
    divan::black_box(parse_transaction(divan::black_box("A1001,DEPOSIT,abc"))).ok();
}

/// Parse and execute the mixed line set against one engine
#[divan::bench]
fn process_mixed_lines(bencher: divan::Bencher) {
    bencher
        .with_inputs(TransactionEngine::new)
        .bench_local_values(|mut engine| {
            for line in LINES {
                divan::black_box(engine.process_line(line)).ok();
            }
            engine
        });
}

/// Full sessions, prompts disabled, of increasing size
#[divan::bench(args = [100, 1_000, 100_000])]
fn full_session(bencher: divan::Bencher, transactions: usize) {
    let input = session_input(transactions);
    bencher.bench_local(|| {
        let mut session = InteractiveSession::new(SessionConfig { prompts: false });
        let mut output = Vec::with_capacity(input.len() * 2);
        session
            .run(input.as_bytes(), &mut output)
            .expect("Session failed");
        output
    });
}
