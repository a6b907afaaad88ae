use trb::ids::AccountId;
use trb::input::Command;
use trb::{
    audit, list_accounts, AccountReport, AccountTransactionError, Accounts, Clients,
    RegistryError, Result,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Operation rejected on account {0}: {1}")]
    Rejected(AccountId, AccountTransactionError),
}

/// Owns the registries for the lifetime of one run, and applies operator commands to them
#[derive(Debug, Default)]
pub struct Session {
    clients: Clients,
    accounts: Accounts,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command. Statement commands return the rendered statement for the operator.
    pub fn process(&mut self, command: Command) -> Result<Option<String>> {
        let name = command.name();

        audit::logged(name, || self.dispatch(command))
    }

    pub fn build_report(&self) -> Vec<AccountReport> {
        list_accounts(self.accounts.as_slice(), &self.clients)
            .map(|view| view.report())
            .collect()
    }

    fn dispatch(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::CreateClient {
                tax_id,
                name,
                birth_date,
                address,
            } => {
                let client = self
                    .clients
                    .create_client(tax_id, name, birth_date, address)?;

                log::debug!("Created client: {client:?}");
            }

            Command::OpenAccount { tax_id, kind } => {
                let id = self.accounts.open_account(&mut self.clients, &tax_id, kind)?;

                log::debug!("Opened account {id} for client {tax_id}: {kind:?}");
            }

            Command::Execute {
                tax_id,
                account,
                transaction,
            } => {
                let client = self
                    .clients
                    .find_client(&tax_id)
                    .ok_or_else(|| RegistryError::ClientNotFound(tax_id.clone()))?;

                let account = self.accounts.account_of_mut(client, account)?;
                let id = account.id();

                client
                    .try_execute(account, &transaction)
                    .map_err(|e| SessionError::Rejected(id, e))?;

                log::debug!(
                    "Applied {transaction:?} to account {id}, balance is now {}",
                    account.balance()
                );
            }

            Command::Statement {
                tax_id,
                account,
                filter,
            } => {
                let client = self
                    .clients
                    .find_client(&tax_id)
                    .ok_or_else(|| RegistryError::ClientNotFound(tax_id.clone()))?;

                let account = self.accounts.account_of(client, account)?;

                let statement = format!(
                    "Statement for account {} of {}:\n{}",
                    account.id(),
                    client.name,
                    account.statement(filter)
                );
                log::debug!("{statement}");

                return Ok(Some(statement));
            }
        }

        Ok(None)
    }
}
