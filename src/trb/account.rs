use crate::history::{HistoryRecord, TransactionHistory};
use crate::ids::{AccountId, TaxId};
use crate::statement::Statement;
use crate::{Money, TransactionKind};

use thiserror::Error;

/// Administrative branch every account belongs to
pub const BRANCH_CODE: &str = "0001";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountTransactionError {
    #[error("Invalid amount: {0} must be greater than zero")]
    InvalidAmount(Money),

    #[error("Insufficient funds: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { requested: Money, balance: Money },

    #[error("Withdrawal of {requested} exceeds the per-transaction limit of {limit}")]
    PerTransactionLimitExceeded { requested: Money, limit: Money },

    #[error("Withdrawal count exceeded: {max} withdrawals already made")]
    WithdrawalCountExceeded { max: usize },

    #[error("Deposit of {0} would overflow the balance")]
    BalanceOverflow(Money),
}

/// Withdrawal rules of a checking account.
///
/// `max_withdrawals` caps the successful withdrawals over the whole lifetime of the account; it is
/// never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingLimits {
    pub per_transaction_limit: Money,
    pub max_withdrawals: usize,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        return Self {
            per_transaction_limit: Money::units(500),
            max_withdrawals: 3,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Standard,
    Checking(CheckingLimits),
}

/// Account holds a balance and the history of the transactions that produced it.
///
/// The owner is kept as the client's tax id, a key into the client registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    branch_code: &'static str,
    balance: Money,
    owner: TaxId,
    history: TransactionHistory,
    kind: AccountKind,
}

impl Account {
    pub fn open(id: AccountId, owner: TaxId, kind: AccountKind) -> Self {
        return Self {
            id,
            branch_code: BRANCH_CODE,
            balance: Money::ZERO,
            owner,
            history: TransactionHistory::new(),
            kind,
        };
    }

    pub fn standard(id: AccountId, owner: TaxId) -> Self {
        return Self::open(id, owner, AccountKind::Standard);
    }

    pub fn checking(id: AccountId, owner: TaxId, limits: CheckingLimits) -> Self {
        return Self::open(id, owner, AccountKind::Checking(limits));
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn branch_code(&self) -> &str {
        self.branch_code
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn deposit(&mut self, amount: Money) -> bool {
        self.try_deposit(amount).is_ok()
    }

    pub fn withdraw(&mut self, amount: Money) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    /// Adds `amount` to the balance. Does not record history.
    pub fn try_deposit(&mut self, amount: Money) -> Result<(), AccountTransactionError> {
        if !amount.is_positive() {
            return Err(AccountTransactionError::InvalidAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .map_err(|_| AccountTransactionError::BalanceOverflow(amount))?;

        Ok(())
    }

    /// Subtracts `amount` from the balance after checking the rules of the account kind.
    /// Does not record history.
    ///
    /// Checking accounts test the per-transaction limit first, then the withdrawal count, then the
    /// rules shared with standard accounts.
    pub fn try_withdraw(&mut self, amount: Money) -> Result<(), AccountTransactionError> {
        if let AccountKind::Checking(limits) = self.kind {
            if amount > limits.per_transaction_limit {
                return Err(AccountTransactionError::PerTransactionLimitExceeded {
                    requested: amount,
                    limit: limits.per_transaction_limit,
                });
            }

            let prior_withdrawals = self.history.count(TransactionKind::Withdrawal);

            if prior_withdrawals >= limits.max_withdrawals {
                return Err(AccountTransactionError::WithdrawalCountExceeded {
                    max: limits.max_withdrawals,
                });
            }
        }

        if !amount.is_positive() {
            return Err(AccountTransactionError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountTransactionError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        // amount <= balance, cannot underflow
        self.balance = Money(self.balance.0 - amount.0);

        Ok(())
    }

    pub fn statement(&self, filter: Option<TransactionKind>) -> Statement<'_> {
        Statement {
            filter,
            records: self.history.filtered(filter).collect(),
            balance: self.balance,
        }
    }

    pub(crate) fn record(&mut self, record: HistoryRecord) {
        self.history.append(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Transaction;

    const SOME_ACCOUNT_ID: AccountId = AccountId(1);

    const SOME_AMOUNT: Money = Money::units(100);
    const OTHER_AMOUNT: Money = Money::units(50);

    fn some_owner() -> TaxId {
        TaxId::new("111")
    }

    fn build_checking(per_transaction_limit: Money, max_withdrawals: usize) -> Account {
        Account::checking(
            SOME_ACCOUNT_ID,
            some_owner(),
            CheckingLimits {
                per_transaction_limit,
                max_withdrawals,
            },
        )
    }

    #[test]
    fn open() {
        let account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert_eq!(account.id(), SOME_ACCOUNT_ID);
        assert_eq!(account.branch_code(), "0001");
        assert_eq!(account.balance(), Money::ZERO);
        assert_eq!(account.owner(), &some_owner());
        assert!(account.history().is_empty());
        assert_eq!(account.kind(), &AccountKind::Standard);
    }

    #[test]
    fn default_checking_limits() {
        assert_eq!(
            CheckingLimits::default(),
            CheckingLimits {
                per_transaction_limit: Money::units(500),
                max_withdrawals: 3,
            }
        );
    }

    #[test]
    fn deposit() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert!(account.deposit(SOME_AMOUNT));
        assert!(account.deposit(OTHER_AMOUNT));

        assert_eq!(account.balance(), Money::units(150));
        // recording is left to the transaction
        assert!(account.history().is_empty());
    }

    #[test]
    fn fail_to_deposit_non_positive() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert_eq!(
            account.try_deposit(Money::units(-10)),
            Err(AccountTransactionError::InvalidAmount(Money::units(-10)))
        );
        assert!(!account.deposit(Money::ZERO));

        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn fail_to_deposit_past_overflow() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert!(account.deposit(Money::MAX));
        assert_eq!(
            account.try_deposit(Money(1)),
            Err(AccountTransactionError::BalanceOverflow(Money(1)))
        );

        assert_eq!(account.balance(), Money::MAX);
    }

    #[test]
    fn withdraw_down_to_zero() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert!(account.deposit(SOME_AMOUNT));
        assert!(account.withdraw(SOME_AMOUNT));

        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn fail_to_withdraw_more_than_balance() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert_eq!(
            account.try_withdraw(Money::units(10)),
            Err(AccountTransactionError::InsufficientFunds {
                requested: Money::units(10),
                balance: Money::ZERO,
            })
        );

        assert!(account.deposit(OTHER_AMOUNT));
        assert!(!account.withdraw(SOME_AMOUNT));

        assert_eq!(account.balance(), OTHER_AMOUNT);
    }

    #[test]
    fn fail_to_withdraw_non_positive() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());
        assert!(account.deposit(SOME_AMOUNT));

        assert_eq!(
            account.try_withdraw(Money::ZERO),
            Err(AccountTransactionError::InvalidAmount(Money::ZERO))
        );
        assert!(!account.withdraw(Money::units(-5)));

        assert_eq!(account.balance(), SOME_AMOUNT);
    }

    #[test]
    fn standard_account_has_no_withdrawal_cap() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());
        assert!(Transaction::Deposit(Money::units(1000)).apply(&mut account));

        for _ in 0..10 {
            assert!(Transaction::Withdrawal(Money::units(1)).apply(&mut account));
        }

        assert!(Transaction::Withdrawal(Money::units(600)).apply(&mut account));
        assert_eq!(account.balance(), Money::units(390));
    }

    #[test]
    fn fail_to_withdraw_above_checking_limit() {
        let mut account = build_checking(Money::units(500), 3);
        assert!(account.deposit(Money::units(1000)));

        assert_eq!(
            account.try_withdraw(Money::units(600)),
            Err(AccountTransactionError::PerTransactionLimitExceeded {
                requested: Money::units(600),
                limit: Money::units(500),
            })
        );

        assert!(account.withdraw(Money::units(500)));
        assert_eq!(account.balance(), Money::units(500));
    }

    #[test]
    fn limit_is_checked_before_funds() {
        let mut account = build_checking(Money::units(500), 3);

        assert!(matches!(
            account.try_withdraw(Money::units(600)),
            Err(AccountTransactionError::PerTransactionLimitExceeded { .. })
        ));
    }

    #[test]
    fn fail_to_withdraw_past_withdrawal_count() {
        let mut account = build_checking(Money::units(500), 2);
        assert!(Transaction::Deposit(SOME_AMOUNT).apply(&mut account));

        assert!(Transaction::Withdrawal(Money::units(10)).apply(&mut account));
        assert!(Transaction::Withdrawal(Money::units(10)).apply(&mut account));

        assert_eq!(
            account.try_withdraw(Money::units(10)),
            Err(AccountTransactionError::WithdrawalCountExceeded { max: 2 })
        );

        // deposits do not reset the cap
        assert!(Transaction::Deposit(SOME_AMOUNT).apply(&mut account));
        assert!(!Transaction::Withdrawal(Money::units(1)).apply(&mut account));

        assert_eq!(account.balance(), Money::units(180));
        assert_eq!(account.history().count(TransactionKind::Withdrawal), 2);
    }

    #[test]
    fn failed_withdrawals_do_not_count() {
        let mut account = build_checking(Money::units(500), 1);
        assert!(Transaction::Deposit(SOME_AMOUNT).apply(&mut account));

        assert!(!Transaction::Withdrawal(Money::units(200)).apply(&mut account));
        assert!(!Transaction::Withdrawal(Money::units(600)).apply(&mut account));

        assert!(Transaction::Withdrawal(SOME_AMOUNT).apply(&mut account));
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn statement() {
        let mut account = Account::standard(SOME_ACCOUNT_ID, some_owner());

        assert!(Transaction::Deposit(SOME_AMOUNT).apply(&mut account));
        assert!(Transaction::Withdrawal(OTHER_AMOUNT).apply(&mut account));

        let statement = account.statement(Some(TransactionKind::Withdrawal));

        assert_eq!(statement.records.len(), 1);
        assert_eq!(statement.records[0].amount, OTHER_AMOUNT);
        assert_eq!(statement.balance, OTHER_AMOUNT);

        assert_eq!(account.statement(None).records.len(), 2);
    }
}
