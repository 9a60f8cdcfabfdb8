//! Error types for the ledger.

use crate::amount::Amount;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while operating on accounts.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount below zero
    #[error("Negative amount invalid: {0}")]
    InvalidAmount(Amount),

    /// Amount at or above the per-transaction ceiling
    #[error("Transaction too large: {0}")]
    AmountTooLarge(Amount),

    /// Withdrawal exceeds the available balance
    #[error("Insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: Amount, balance: Amount },

    /// Delivery to the target failed and the refund to the source failed too.
    /// The withdrawn funds are in neither account.
    #[error("Transfer of {amount} failed ({cause}) and refund failed: {refund}")]
    CompensationFailed {
        amount: Amount,
        cause: Box<LedgerError>,
        refund: Box<LedgerError>,
    },

    /// No account is registered under the identifier
    #[error("Unknown account {0}")]
    UnknownAccount(String),

    /// An account is already registered under the identifier
    #[error("Account {0} already exists")]
    DuplicateAccount(String),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid script record
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: bank-ledger <script.csv>")]
    MissingArgument,
}
