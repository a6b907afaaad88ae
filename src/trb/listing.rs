use crate::account::Account;
use crate::ids::AccountId;
use crate::registry::Clients;
use crate::{AccountReport, Money};

use std::{fmt, slice};

/// Display view of one account: branch, number, holder name and balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView<'a> {
    pub branch_code: &'a str,
    pub id: AccountId,
    pub holder: &'a str,
    pub balance: Money,
}

impl AccountView<'_> {
    pub fn report(&self) -> AccountReport {
        AccountReport {
            branch: self.branch_code.to_string(),
            account: self.id.0,
            holder: self.holder.to_string(),
            balance: self.balance.to_string(),
        }
    }
}

impl fmt::Display for AccountView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch_code)?;
        writeln!(f, "Number:\t\t{}", self.id)?;
        writeln!(f, "Holder:\t\t{}", self.holder)?;
        return write!(f, "Balance:\t{}", self.balance);
    }
}

/// Single-pass traversal over a snapshot of accounts, in the order given.
///
/// Consumed by iterating; call `list_accounts` again for a second pass.
#[derive(Debug)]
pub struct AccountListing<'a> {
    accounts: slice::Iter<'a, Account>,
    clients: &'a Clients,
}

pub fn list_accounts<'a>(accounts: &'a [Account], clients: &'a Clients) -> AccountListing<'a> {
    AccountListing {
        accounts: accounts.iter(),
        clients,
    }
}

impl<'a> Iterator for AccountListing<'a> {
    type Item = AccountView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let account = self.accounts.next()?;

        // An owner missing from the registry is shown by tax id
        let holder = self
            .clients
            .find_client(account.owner())
            .map(|client| client.name.as_str())
            .unwrap_or_else(|| account.owner().as_str());

        Some(AccountView {
            branch_code: account.branch_code(),
            id: account.id(),
            holder,
            balance: account.balance(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.accounts.size_hint()
    }
}
