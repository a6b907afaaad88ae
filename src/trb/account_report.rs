use serde::{Deserialize, Serialize};

/// One row of the account listing, as written to CSV
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub branch: String,
    pub account: u32,
    pub holder: String,
    pub balance: String,
}
