use crate::account::{Account, AccountTransactionError};
use crate::ids::{AccountId, TaxId};
use crate::Transaction;

use std::ops::{Deref, DerefMut};

/// Data shared by every kind of client: where they live, and which accounts they hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub address: String,
    accounts: Vec<AccountId>,
}

impl Client {
    pub fn new(address: impl Into<String>) -> Self {
        return Self {
            address: address.into(),
            accounts: vec![],
        };
    }

    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    /// Links the account to this client. Keeping `Account::owner` consistent is up to the caller.
    pub fn add_account(&mut self, account_id: AccountId) {
        self.accounts.push(account_id);
    }

    pub fn execute(&self, account: &mut Account, transaction: &Transaction) -> bool {
        self.try_execute(account, transaction).is_ok()
    }

    /// Mediation point between the client's intent and the account mutation
    pub fn try_execute(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), AccountTransactionError> {
        transaction.try_apply(account)
    }
}

/// Natural person client, identified by a tax id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonClient {
    client: Client,
    pub name: String,
    pub birth_date: String,
    tax_id: TaxId,
}

impl PersonClient {
    pub fn new(
        tax_id: TaxId,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        return Self {
            client: Client::new(address),
            name: name.into(),
            birth_date: birth_date.into(),
            tax_id,
        };
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }
}

impl Deref for PersonClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        return &self.client;
    }
}

impl DerefMut for PersonClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        return &mut self.client;
    }
}
