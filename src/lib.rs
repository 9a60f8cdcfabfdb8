//! # Bank Ledger
//!
//! Account balance bookkeeping: deposits, withdrawals and transfers gated by
//! a shared amount validation policy, with an append-only history per account.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal` values, never floats
//! - **Validate first**: amounts outside `[0, 1000)` are rejected before any mutation
//! - **Append-only history**: every successful mutation adds exactly one record
//! - **Best-effort compensation**: a failed transfer delivery is refunded once
//!
//! ## Example
//!
//! ```
//! use bank_ledger::{Account, Amount};
//!
//! let mut a = Account::new("12345", "John Doe");
//! let mut b = Account::new("00001", "Jane Roe");
//! b.deposit(Amount::from(400)).unwrap();
//! b.transfer(Amount::from(200), &mut a).unwrap();
//! assert_eq!(a.balance(), Amount::from(200));
//! assert_eq!(b.history(), ["Deposit: $400", "Withdrawal: $200"]);
//! ```

pub mod account;
pub mod amount;
pub mod error;
pub mod ledger;
pub mod script;
pub mod transfer;
pub mod validation;

pub use account::{Account, Operation};
pub use amount::Amount;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use script::{Command, CommandKind, ScriptRecord};
pub use transfer::{Credit, Debit, TransferOutcome};
pub use validation::{validate_amount, MAX_AMOUNT, MIN_AMOUNT};
