//! Account model and operations.
//!
//! Maintains two invariants: the balance never goes negative through a
//! withdrawal, and every successful mutation appends exactly one history record.

use crate::amount::Amount;
use crate::error::{LedgerError, Result};
use crate::transfer::{self, Credit, Debit, TransferOutcome};
use crate::validation::validate_amount;
use log::info;
use std::fmt;

/// Balance-changing operations, as they appear in the transaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
}

impl Operation {
    /// Text of the history record for this operation.
    fn record(self, amount: Amount) -> String {
        match self {
            Operation::Deposit => format!("Deposit: ${}", amount),
            Operation::Withdraw => format!("Withdrawal: ${}", amount),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit => f.write_str("deposit"),
            Operation::Withdraw => f.write_str("withdraw"),
        }
    }
}

/// A single ledger: balance plus an append-only transaction history.
///
/// # Invariants
///
/// - `balance` starts at zero and is only changed by deposits and withdrawals
/// - `history` only grows, in insertion order
#[derive(Debug, Clone)]
pub struct Account {
    identifier: String,
    owner: String,
    balance: Amount,
    history: Vec<String>,
}

impl Account {
    /// Creates an empty account. Uniqueness of `identifier` is up to the caller.
    pub fn new(identifier: impl Into<String>, owner: impl Into<String>) -> Self {
        Account {
            identifier: identifier.into(),
            owner: owner.into(),
            balance: Amount::ZERO,
            history: Vec::new(),
        }
    }

    /// Returns the identifier the account was created with.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the owner's display name.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Returns the transaction history, oldest first.
    ///
    /// The slice is borrowed immutably, so callers cannot rewrite past records.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Adds money to the account.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` or `AmountTooLarge`; the account is left untouched.
    pub fn deposit(&mut self, amount: Amount) -> Result<()> {
        self.guarded(Operation::Deposit, amount, |account| {
            account.balance += amount;
            account.history.push(Operation::Deposit.record(amount));
            Ok(())
        })
    }

    /// Removes money from the account if the balance covers it.
    ///
    /// # Errors
    ///
    /// `InvalidAmount`, `AmountTooLarge` or `InsufficientFunds`; the account is
    /// left untouched in every case.
    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.guarded(Operation::Withdraw, amount, |account| {
            if account.balance < amount {
                return Err(LedgerError::InsufficientFunds {
                    requested: amount,
                    balance: account.balance,
                });
            }
            account.balance -= amount;
            account.history.push(Operation::Withdraw.record(amount));
            Ok(())
        })
    }

    /// Transfers `amount` to another account.
    ///
    /// See [`transfer::transfer`] for the protocol and its failure modes.
    pub fn transfer<T: Credit + ?Sized>(
        &mut self,
        amount: Amount,
        target: &mut T,
    ) -> Result<TransferOutcome> {
        transfer::transfer(self, amount, target)
    }

    /// Transfers `amount` from this account to itself.
    ///
    /// Leaves the balance unchanged but records a withdrawal and a deposit.
    pub fn transfer_to_self(&mut self, amount: Amount) -> Result<TransferOutcome> {
        transfer::transfer_within(self, amount)
    }

    /// Validate, then mutate, then log the resulting balance.
    ///
    /// Nothing is logged when validation or the mutation fails.
    fn guarded<F>(&mut self, operation: Operation, amount: Amount, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        validate_amount(amount)?;
        mutate(&mut *self)?;
        info!(
            "Transaction: {}, Amount: ${}, Balance: ${}",
            operation, amount, self.balance
        );
        Ok(())
    }
}

impl Credit for Account {
    fn credit(&mut self, amount: Amount) -> Result<()> {
        self.deposit(amount)
    }
}

impl Debit for Account {
    fn debit(&mut self, amount: Amount) -> Result<()> {
        self.withdraw(amount)
    }
}
