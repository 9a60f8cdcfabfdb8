//! Account registry and script driver.
//!
//! The ledger owns accounts by identifier and applies operations to them,
//! either one call at a time or by streaming a CSV script.

use crate::account::Account;
use crate::amount::Amount;
use crate::error::{LedgerError, Result};
use crate::script::{Command, CommandKind, ScriptRecord};
use crate::transfer::TransferOutcome;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{Read, Write};

/// Row of the final account-state report.
#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    account: &'a str,
    owner: &'a str,
    balance: Amount,
    history: String,
}

/// A set of accounts keyed by identifier.
///
/// # Output Ordering
///
/// Accounts are listed sorted by identifier so output is deterministic.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
        }
    }

    /// Registers a new account with a zero balance.
    ///
    /// # Errors
    ///
    /// `DuplicateAccount` if the identifier is taken.
    pub fn open(&mut self, identifier: &str, owner: &str) -> Result<&Account> {
        match self.accounts.entry(identifier.to_string()) {
            Entry::Occupied(_) => Err(LedgerError::DuplicateAccount(identifier.to_string())),
            Entry::Vacant(slot) => {
                debug!("Opened account {} for {}", identifier, owner);
                let account: &Account = slot.insert(Account::new(identifier, owner));
                Ok(account)
            }
        }
    }

    pub fn account(&self, identifier: &str) -> Option<&Account> {
        self.accounts.get(identifier)
    }

    /// All accounts, sorted by identifier.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<_> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.identifier().cmp(b.identifier()));
        accounts
    }

    pub fn deposit(&mut self, identifier: &str, amount: Amount) -> Result<()> {
        self.account_mut(identifier)?.deposit(amount)
    }

    pub fn withdraw(&mut self, identifier: &str, amount: Amount) -> Result<()> {
        self.account_mut(identifier)?.withdraw(amount)
    }

    /// Transfers `amount` from `source` to `target`.
    ///
    /// When both identifiers name the same account, the funds go out of and
    /// back into that account.
    pub fn transfer(
        &mut self,
        source: &str,
        amount: Amount,
        target: &str,
    ) -> Result<TransferOutcome> {
        if source == target {
            return self.account_mut(source)?.transfer_to_self(amount);
        }
        if !self.accounts.contains_key(target) {
            return Err(LedgerError::UnknownAccount(target.to_string()));
        }

        // Take the source out so both accounts can be borrowed mutably.
        let mut from = self
            .accounts
            .remove(source)
            .ok_or_else(|| LedgerError::UnknownAccount(source.to_string()))?;
        let result = match self.accounts.get_mut(target) {
            Some(to) => from.transfer(amount, to),
            None => Err(LedgerError::UnknownAccount(target.to_string())),
        };
        self.accounts.insert(source.to_string(), from);
        result
    }

    /// Applies a single parsed command.
    pub fn apply(&mut self, command: &Command) -> Result<()> {
        let account = command.account.as_str();
        match &command.kind {
            CommandKind::Open { owner } => self.open(account, owner).map(|_| ()),
            CommandKind::Deposit(amount) => self.deposit(account, *amount),
            CommandKind::Withdraw(amount) => self.withdraw(account, *amount),
            CommandKind::Transfer { amount, target } => {
                match self.transfer(account, *amount, target)? {
                    TransferOutcome::Delivered => {}
                    TransferOutcome::Refunded(cause) => {
                        warn!(
                            "Transfer of {} from {} to {} refunded: {}",
                            amount, account, target, cause
                        );
                    }
                }
                Ok(())
            }
        }
    }

    /// Processes operations from a CSV reader in streaming fashion.
    ///
    /// Rows that fail to parse or whose operation fails are logged at warn
    /// level and skipped; later rows still run.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let command = match result {
                Ok(record) => match record.parse() {
                    Ok(command) => command,
                    Err(message) => {
                        let e = LedgerError::InvalidRecord {
                            row: row_num,
                            message,
                        };
                        warn!("{}", e);
                        continue;
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };

            debug!("Row {}: {:?}", row_num, command);
            if let Err(e) = self.apply(&command) {
                warn!("Row {}: {} failed: {}", row_num, command.account, e);
            }
        }

        Ok(())
    }

    /// Writes final account states to CSV.
    ///
    /// Columns: `account,owner,balance,history`, with history records joined
    /// by `"; "`.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for account in self.accounts() {
            csv_writer.serialize(AccountRow {
                account: account.identifier(),
                owner: account.owner(),
                balance: account.balance(),
                history: account.history().join("; "),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn account_mut(&mut self, identifier: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(identifier)
            .ok_or_else(|| LedgerError::UnknownAccount(identifier.to_string()))
    }
}
