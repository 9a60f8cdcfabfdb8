//! Integration tests for the bank-ledger CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given input file and return stdout
fn run_ledger(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("bank-ledger").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn normalize_csv(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_demo_scenario() {
    let output = run_ledger(&test_data_path("demo.csv"));
    let expected = fs::read_to_string(test_data_path("expected_demo.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_edge_cases_script() {
    let output = run_ledger(&test_data_path("edge_cases.csv"));
    let expected = fs::read_to_string(test_data_path("expected_edge_cases.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_transactions_logged_to_stderr() {
    let mut cmd = Command::cargo_bin("bank-ledger").unwrap();
    cmd.env("RUST_LOG", "info")
        .arg(test_data_path("demo.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Transaction: deposit, Amount: $500, Balance: $500",
        ))
        .stderr(predicate::str::contains(
            "Transaction: withdraw, Amount: $200, Balance: $300",
        ))
        .stderr(predicate::str::contains(
            "Transaction: deposit, Amount: $200, Balance: $500",
        ))
        // Rejected operations never reach the transaction log.
        .stderr(predicate::str::contains("Amount: $1500").not())
        .stderr(predicate::str::contains("Transaction: withdraw, Amount: $400").not())
        .stderr(predicate::str::contains("Amount: $600").not())
        .stderr(predicate::str::contains("Amount: $1000").not());
}

#[test]
fn test_rejections_logged_as_warnings() {
    let mut cmd = Command::cargo_bin("bank-ledger").unwrap();
    cmd.env("RUST_LOG", "warn")
        .arg(test_data_path("demo.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Transaction too large"))
        .stderr(predicate::str::contains("Insufficient funds"))
        .stderr(predicate::str::contains("Transaction: deposit").not());
}

#[test]
fn test_ad_hoc_script_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type,account,amount,target,owner").unwrap();
    writeln!(file, "open,x,,,Xavier").unwrap();
    writeln!(file, "deposit,x,12.5,,").unwrap();
    writeln!(file, "withdraw,x,2.5,,").unwrap();
    file.flush().unwrap();

    let output = run_ledger(file.path().to_str().unwrap());

    assert_eq!(
        normalize_csv(&output),
        vec![
            "account,owner,balance,history",
            "x,Xavier,10.0,Deposit: $12.5; Withdrawal: $2.5",
        ]
    );
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("bank-ledger").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("bank-ledger").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_ledger(&test_data_path("demo.csv"));
    assert!(output.starts_with("account,owner,balance,history"));
}
