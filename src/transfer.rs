//! Transfer protocol between two accounts.
//!
//! A transfer validates the amount, withdraws it from the source and then
//! deposits it into the target. If the target rejects the deposit, the funds
//! are deposited back into the source exactly once. Nothing here is atomic:
//! between the withdrawal and the deposit the funds sit in neither balance.

use crate::amount::Amount;
use crate::error::{LedgerError, Result};
use crate::validation::validate_amount;
use log::{debug, warn};

/// Something that can receive funds.
pub trait Credit {
    fn credit(&mut self, amount: Amount) -> Result<()>;
}

/// Something that can give up funds.
pub trait Debit {
    fn debit(&mut self, amount: Amount) -> Result<()>;
}

/// How a transfer that did not return an error ended.
#[derive(Debug)]
pub enum TransferOutcome {
    /// The target accepted the deposit.
    Delivered,

    /// The target rejected the deposit and the funds went back to the source.
    Refunded(LedgerError),
}

impl TransferOutcome {
    /// Returns `true` if the target received the funds.
    pub fn is_delivered(&self) -> bool {
        matches!(self, TransferOutcome::Delivered)
    }
}

/// Moves `amount` from `source` to `target`.
///
/// # Errors
///
/// - `InvalidAmount` / `AmountTooLarge` before either side is touched
/// - whatever `source.debit` fails with (e.g. `InsufficientFunds`)
/// - `CompensationFailed` if both the delivery and the refund fail
pub fn transfer<S, T>(source: &mut S, amount: Amount, target: &mut T) -> Result<TransferOutcome>
where
    S: Debit + Credit + ?Sized,
    T: Credit + ?Sized,
{
    run(source, amount, |_, amount| target.credit(amount))
}

/// Moves `amount` from `account` back into itself.
///
/// Same protocol as [`transfer`] with the account on both sides.
pub fn transfer_within<S>(account: &mut S, amount: Amount) -> Result<TransferOutcome>
where
    S: Debit + Credit + ?Sized,
{
    run(account, amount, |account, amount| account.credit(amount))
}

fn run<S, F>(source: &mut S, amount: Amount, deliver: F) -> Result<TransferOutcome>
where
    S: Debit + Credit + ?Sized,
    F: FnOnce(&mut S, Amount) -> Result<()>,
{
    validate_amount(amount)?;
    source.debit(amount)?;

    let cause = match deliver(&mut *source, amount) {
        Ok(()) => {
            debug!("Transferred {}", amount);
            return Ok(TransferOutcome::Delivered);
        }
        Err(e) => e,
    };

    warn!("Transfer failed: {}", cause);

    // Single refund attempt, never retried.
    match source.credit(amount) {
        Ok(()) => Ok(TransferOutcome::Refunded(cause)),
        Err(refund) => Err(LedgerError::CompensationFailed {
            amount,
            cause: Box::new(cause),
            refund: Box::new(refund),
        }),
    }
}
