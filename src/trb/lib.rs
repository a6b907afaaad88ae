pub mod account;
mod account_report;
pub mod audit;
pub mod client;
pub mod history;
pub mod ids;
pub mod input;
pub mod listing;
mod money;
pub mod registry;
mod result;
pub mod statement;
mod transaction;

pub use account::{Account, AccountKind, AccountTransactionError, CheckingLimits};
pub use account_report::AccountReport;
pub use client::{Client, PersonClient};
pub use history::{HistoryRecord, TransactionHistory};
pub use listing::{list_accounts, AccountListing, AccountView};
pub use money::{Money, MoneyError};
pub use registry::{Accounts, Clients, RegistryError};
pub use result::Result;
pub use statement::Statement;
pub use transaction::{Transaction, TransactionKind, UnknownTransactionKind};
