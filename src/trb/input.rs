use crate::account::{AccountKind, CheckingLimits};
use crate::ids::{AccountId, TaxId};
use crate::{Money, Result, Transaction, TransactionKind};

use serde::Deserialize;

use thiserror::Error;

/// Represents one row of an operations file
#[derive(Deserialize, Debug, Clone, Default)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub typ: InputRecordType,

    pub tax_id: String,
    pub account: Option<u32>,
    pub amount: Option<String>,
    pub limit: Option<String>,
    pub max_withdrawals: Option<usize>,
    pub filter: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputRecordType {
    #[default]
    Client,
    Account,
    Checking,
    Deposit,
    Withdrawal,
    Statement,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: {0} value missing: {1:?}")]
    MissingField(&'static str, InputRecord),

    #[error("Error parsing input record: tax id is empty: {0:?}")]
    EmptyTaxId(InputRecord),
}

/// Typed operation an input record resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateClient {
        tax_id: TaxId,
        name: String,
        birth_date: String,
        address: String,
    },
    OpenAccount {
        tax_id: TaxId,
        kind: AccountKind,
    },
    Execute {
        tax_id: TaxId,
        account: Option<AccountId>,
        transaction: Transaction,
    },
    Statement {
        tax_id: TaxId,
        account: Option<AccountId>,
        filter: Option<TransactionKind>,
    },
}

impl Command {
    /// Operation name, as used for audit logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateClient { .. } => "create_client",
            Self::OpenAccount { .. } => "create_account",
            Self::Execute {
                transaction: Transaction::Deposit(_),
                ..
            } => "deposit",
            Self::Execute {
                transaction: Transaction::Withdrawal(_),
                ..
            } => "withdraw",
            Self::Statement { .. } => "statement",
        }
    }
}

impl InputRecord {
    pub fn parse_command(self) -> Result<Command> {
        let tax_id = TaxId::new(self.tax_id.as_str());

        if tax_id.as_str().is_empty() {
            Err(InputParseError::EmptyTaxId(self.clone()))?
        }

        let account = self.account.map(AccountId);

        let command = match self.typ {
            InputRecordType::Client => Command::CreateClient {
                tax_id,
                name: self.required("name", &self.name)?,
                birth_date: self.birth_date.clone().unwrap_or_default(),
                address: self.address.clone().unwrap_or_default(),
            },
            InputRecordType::Account => Command::OpenAccount {
                tax_id,
                kind: AccountKind::Standard,
            },
            InputRecordType::Checking => {
                let mut limits = CheckingLimits::default();

                if let Some(limit) = &self.limit {
                    limits.per_transaction_limit = Money::parse(limit)?;
                }

                if let Some(max_withdrawals) = self.max_withdrawals {
                    limits.max_withdrawals = max_withdrawals;
                }

                Command::OpenAccount {
                    tax_id,
                    kind: AccountKind::Checking(limits),
                }
            }
            InputRecordType::Deposit => Command::Execute {
                tax_id,
                account,
                transaction: Transaction::Deposit(self.required_amount()?),
            },
            InputRecordType::Withdrawal => Command::Execute {
                tax_id,
                account,
                transaction: Transaction::Withdrawal(self.required_amount()?),
            },
            InputRecordType::Statement => Command::Statement {
                tax_id,
                account,
                filter: self
                    .filter
                    .as_deref()
                    .map(str::parse::<TransactionKind>)
                    .transpose()?,
            },
        };

        Ok(command)
    }

    fn required_amount(&self) -> Result<Money> {
        let amount = self.required("amount", &self.amount)?;

        Money::parse(&amount)
    }

    fn required(&self, field: &'static str, value: &Option<String>) -> Result<String> {
        let value = value
            .clone()
            .ok_or_else(|| InputParseError::MissingField(field, self.clone()))?;

        Ok(value)
    }
}
