//! Amount validation policy shared by every balance-changing operation.

use crate::amount::Amount;
use crate::error::{LedgerError, Result};

/// Smallest accepted amount (inclusive).
pub const MIN_AMOUNT: Amount = Amount::ZERO;

/// Per-transaction ceiling (exclusive): exactly 1000 is rejected.
pub const MAX_AMOUNT: Amount = Amount::new(rust_decimal::Decimal::ONE_THOUSAND);

/// Checks that `amount` lies in `[MIN_AMOUNT, MAX_AMOUNT)`.
///
/// The lower bound is checked first, so a value can only ever fail one way.
pub fn validate_amount(amount: Amount) -> Result<()> {
    if amount < MIN_AMOUNT {
        return Err(LedgerError::InvalidAmount(amount));
    }
    if amount >= MAX_AMOUNT {
        return Err(LedgerError::AmountTooLarge(amount));
    }
    Ok(())
}
