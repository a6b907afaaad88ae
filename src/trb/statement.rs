use crate::history::HistoryRecord;
use crate::{Money, TransactionKind};

use std::fmt;

/// Statement of account: the history records matching `filter`, and the balance at the time it was taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub filter: Option<TransactionKind>,
    pub records: Vec<&'a HistoryRecord>,
    pub balance: Money,
}

impl Statement<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No transactions recorded")?;
        }

        for record in self.records.iter() {
            writeln!(f, "{record}")?;
        }

        return write!(f, "Balance: {}", self.balance);
    }
}
