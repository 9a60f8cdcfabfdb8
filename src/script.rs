//! Script records for CSV parsing and their typed form.

use crate::amount::Amount;
use serde::Deserialize;

/// Most digits an amount may carry after the decimal point.
pub const MAX_AMOUNT_SCALE: u32 = 4;

/// Raw operation record as read from CSV.
///
/// Columns: `type,account,amount,target,owner`. Only the fields an operation
/// needs have to be present.
#[derive(Debug, Deserialize)]
pub struct ScriptRecord {
    /// Operation type: open, deposit, withdraw (or withdrawal), transfer
    #[serde(rename = "type")]
    pub op_type: String,

    /// Identifier of the account the operation applies to
    pub account: String,

    /// Amount (deposit, withdraw, transfer)
    #[serde(default)]
    pub amount: Option<Amount>,

    /// Receiving account identifier (transfer only)
    #[serde(default)]
    pub target: Option<String>,

    /// Owner display name (open only)
    #[serde(default)]
    pub owner: Option<String>,
}

impl ScriptRecord {
    /// Parses the raw record into a typed command.
    ///
    /// Returns a description of the problem if the record is unusable
    /// (unknown type, missing or malformed field).
    pub fn parse(&self) -> Result<Command, String> {
        let account = self.account.trim();
        if account.is_empty() {
            return Err("missing account".to_string());
        }

        let kind = match self.op_type.trim().to_lowercase().as_str() {
            "open" => CommandKind::Open {
                owner: Self::field(&self.owner).unwrap_or_default().to_string(),
            },
            "deposit" => CommandKind::Deposit(self.parse_amount()?),
            "withdraw" | "withdrawal" => CommandKind::Withdraw(self.parse_amount()?),
            "transfer" => {
                let amount = self.parse_amount()?;
                let target = Self::field(&self.target)
                    .ok_or_else(|| "missing target".to_string())?
                    .to_string();
                CommandKind::Transfer { amount, target }
            }
            other => return Err(format!("unknown operation type '{}'", other)),
        };

        Ok(Command {
            account: account.to_string(),
            kind,
        })
    }

    /// Trimmed, non-empty optional field.
    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn parse_amount(&self) -> Result<Amount, String> {
        let amount = self.amount.ok_or_else(|| "missing amount".to_string())?;
        if amount.scale() > MAX_AMOUNT_SCALE {
            return Err(format!(
                "amount {} has more than {} decimal places",
                amount, MAX_AMOUNT_SCALE
            ));
        }
        Ok(amount)
    }
}

/// A parsed operation ready to apply to a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Account the operation applies to (the source, for transfers)
    pub account: String,

    pub kind: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// Register a new account with a zero balance.
    Open { owner: String },

    Deposit(Amount),

    Withdraw(Amount),

    /// Move funds to `target`, which may be the same account.
    Transfer { amount: Amount, target: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(op_type: &str, account: &str, amount: Option<&str>) -> ScriptRecord {
        ScriptRecord {
            op_type: op_type.to_string(),
            account: account.to_string(),
            amount: amount.map(|a| Amount::from_str(a).unwrap()),
            target: None,
            owner: None,
        }
    }

    #[test]
    fn test_parse_deposit() {
        let parsed = record("deposit", "12345", Some("500")).parse().unwrap();
        assert_eq!(parsed.account, "12345");
        match parsed.kind {
            CommandKind::Deposit(amt) => assert_eq!(amt.to_string(), "500"),
            _ => panic!("Expected Deposit"),
        }
    }

    #[test]
    fn test_parse_withdraw_aliases() {
        for op in ["withdraw", "withdrawal", " Withdrawal "] {
            let parsed = record(op, "1", Some("5.25")).parse().unwrap();
            assert_eq!(parsed.kind, CommandKind::Withdraw(Amount::from_str("5.25").unwrap()));
        }
    }

    #[test]
    fn test_parse_open_with_owner() {
        let mut rec = record("open", "00001", None);
        rec.owner = Some("  Jane Roe ".to_string());

        let parsed = rec.parse().unwrap();
        assert_eq!(
            parsed.kind,
            CommandKind::Open {
                owner: "Jane Roe".to_string()
            }
        );
    }

    #[test]
    fn test_parse_transfer() {
        let mut rec = record("transfer", "00001", Some("200"));
        rec.target = Some("12345".to_string());

        let parsed = rec.parse().unwrap();
        assert_eq!(
            parsed.kind,
            CommandKind::Transfer {
                amount: Amount::from(200),
                target: "12345".to_string()
            }
        );
    }

    #[test]
    fn test_parse_keeps_negative_amount_for_validation() {
        let parsed = record("deposit", "1", Some("-10")).parse().unwrap();
        assert_eq!(parsed.kind, CommandKind::Deposit(Amount::from(-10)));
    }

    #[test]
    fn test_parse_rejects_bad_records() {
        assert!(record("unknown", "1", Some("1")).parse().is_err());
        assert!(record("deposit", "1", None).parse().is_err());
        assert!(record("deposit", "", Some("1")).parse().is_err());
        assert!(record("transfer", "1", Some("1")).parse().is_err());
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        let tiny = "0.0000000000000000000000000001";
        assert!(record("deposit", "1", Some(tiny)).parse().is_err());
        assert!(record("withdraw", "1", Some("1.00001")).parse().is_err());

        let parsed = record("deposit", "1", Some("0.0001")).parse().unwrap();
        assert_eq!(parsed.kind, CommandKind::Deposit(Amount::from_str("0.0001").unwrap()));
    }

    #[test]
    fn test_deserialize_amount_column() {
        let csv = "type,account,amount,target,owner\n\
                   deposit,1, 7.5 ,,\n\
                   open,2,,,Bob\n\
                   deposit,3,abc,,\n";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut rows = reader.deserialize::<ScriptRecord>();

        let deposit = rows.next().unwrap().unwrap();
        assert_eq!(deposit.amount, Some(Amount::from_str("7.5").unwrap()));

        let open = rows.next().unwrap().unwrap();
        assert_eq!(open.amount, None);

        assert!(rows.next().unwrap().is_err());
    }
}
