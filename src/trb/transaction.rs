use crate::account::{Account, AccountTransactionError};
use crate::history::HistoryRecord;
use crate::Money;

use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Unknown transaction kind: {0:?}")]
pub struct UnknownTransactionKind(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.label());
    }
}

/// Labels compare case-insensitively
impl FromStr for TransactionKind {
    type Err = UnknownTransactionKind;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();

        [Self::Deposit, Self::Withdrawal]
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownTransactionKind(label.to_string()))
    }
}

/// Transaction represents a requested change to an account's balance.
///
/// It is a transient value: applying it either fails without touching the account, or mutates the
/// balance and appends exactly one `HistoryRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Money),
    Withdrawal(Money),
}

impl Transaction {
    pub fn amount(&self) -> Money {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit(_) => TransactionKind::Deposit,
            Self::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn apply(&self, account: &mut Account) -> bool {
        self.try_apply(account).is_ok()
    }

    pub fn try_apply(&self, account: &mut Account) -> Result<(), AccountTransactionError> {
        self.try_apply_at(account, Local::now())
    }

    /// Applies the transaction, recording it with the given timestamp only if the account accepted it
    pub fn try_apply_at(
        &self,
        account: &mut Account,
        timestamp: DateTime<Local>,
    ) -> Result<(), AccountTransactionError> {
        match self {
            Self::Deposit(amount) => account.try_deposit(*amount)?,
            Self::Withdrawal(amount) => account.try_withdraw(*amount)?,
        }

        account.record(HistoryRecord {
            kind: self.kind(),
            amount: self.amount(),
            timestamp,
        });

        Ok(())
    }
}
