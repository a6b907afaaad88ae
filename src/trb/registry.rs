use crate::account::{Account, AccountKind};
use crate::client::PersonClient;
use crate::ids::{AccountId, TaxId};
use crate::Result;

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A client with tax id {0} already exists")]
    DuplicateTaxId(TaxId),

    #[error("Client not found: {0}")]
    ClientNotFound(TaxId),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("No account numbers left to assign")]
    AccountIdsExhausted,

    #[error("Account {0} does not belong to client {1}")]
    AccountNotOwned(AccountId, TaxId),

    #[error("Client {0} has no account")]
    NoAccount(TaxId),
}

/// Insertion-ordered registry of clients, indexed by tax id
#[derive(Debug, Default)]
pub struct Clients {
    clients: Vec<PersonClient>,
    lookup_map: HashMap<TaxId, usize>,
}

impl Clients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new client. Fails, leaving the registry untouched, if the tax id is already taken.
    pub fn create_client(
        &mut self,
        tax_id: TaxId,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<&mut PersonClient> {
        if self.lookup_map.contains_key(&tax_id) {
            return Err(RegistryError::DuplicateTaxId(tax_id).into());
        }

        let index = self.clients.len();

        self.clients
            .push(PersonClient::new(tax_id.clone(), name, birth_date, address));
        self.lookup_map.insert(tax_id, index);

        Ok(&mut self.clients[index])
    }

    pub fn find_client(&self, tax_id: &TaxId) -> Option<&PersonClient> {
        self.lookup_map
            .get(tax_id)
            .map(|index| &self.clients[*index])
    }

    pub fn find_client_mut(&mut self, tax_id: &TaxId) -> Option<&mut PersonClient> {
        let index = *self.lookup_map.get(tax_id)?;

        self.clients.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonClient> + '_ {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered registry of every account, indexed by account number
#[derive(Debug, Default)]
pub struct Accounts {
    accounts: Vec<Account>,
    lookup_map: HashMap<AccountId, usize>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers are handed out sequentially, starting at 1
    pub fn next_id(&self) -> Result<AccountId> {
        account_id_for(self.accounts.len())
    }

    /// Account factory: opens an account for an existing client under the next free number,
    /// registers it, then links it to the client
    pub fn open_account(
        &mut self,
        clients: &mut Clients,
        tax_id: &TaxId,
        kind: AccountKind,
    ) -> Result<AccountId> {
        let client = clients
            .find_client_mut(tax_id)
            .ok_or_else(|| RegistryError::ClientNotFound(tax_id.clone()))?;

        let id = self.next_id()?;

        self.lookup_map.insert(id, self.accounts.len());
        self.accounts
            .push(Account::open(id, client.tax_id().clone(), kind));

        client.add_account(id);

        Ok(id)
    }

    pub fn find_account(&self, id: AccountId) -> Option<&Account> {
        self.lookup_map.get(&id).map(|index| &self.accounts[*index])
    }

    pub fn find_account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        let index = *self.lookup_map.get(&id)?;

        self.accounts.get_mut(index)
    }

    /// The client's first account, used when the operator does not pick one
    pub fn first_account_of(&self, client: &PersonClient) -> Option<&Account> {
        client
            .accounts()
            .first()
            .and_then(|id| self.find_account(*id))
    }

    /// Resolves the account a client operates on: `id` if given and owned by the client,
    /// otherwise the client's first account
    pub fn account_of(&self, client: &PersonClient, id: Option<AccountId>) -> Result<&Account> {
        let id = resolve_account_id(client, id)?;

        let account = self
            .find_account(id)
            .ok_or_else(|| RegistryError::AccountNotFound(id))?;

        Ok(account)
    }

    /// Same as `account_of`, for operations that mutate the account
    pub fn account_of_mut(
        &mut self,
        client: &PersonClient,
        id: Option<AccountId>,
    ) -> Result<&mut Account> {
        let id = resolve_account_id(client, id)?;

        let account = self
            .find_account_mut(id)
            .ok_or_else(|| RegistryError::AccountNotFound(id))?;

        Ok(account)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.iter()
    }

    pub fn as_slice(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of the account registered at `position` (0-based)
fn account_id_for(position: usize) -> Result<AccountId> {
    let id = position
        .checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(RegistryError::AccountIdsExhausted)?;

    Ok(AccountId(id))
}

fn resolve_account_id(client: &PersonClient, id: Option<AccountId>) -> Result<AccountId> {
    let id = match id {
        Some(id) => {
            if !client.accounts().contains(&id) {
                Err(RegistryError::AccountNotOwned(id, client.tax_id().clone()))?
            }
            id
        }
        None => *client
            .accounts()
            .first()
            .ok_or_else(|| RegistryError::NoAccount(client.tax_id().clone()))?,
    };

    Ok(id)
}
