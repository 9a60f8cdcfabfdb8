//! Bank Ledger CLI
//!
//! Runs a CSV script of account operations and outputs the final account
//! states.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > accounts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: defaults to `info`, which prints one line per transaction;
//!   set to `warn` to see only rejected operations or `debug` for row tracing

use bank_ledger::{Ledger, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(LedgerError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut ledger = Ledger::new();
    ledger.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    ledger.write_output(handle)?;

    Ok(())
}
