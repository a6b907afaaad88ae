use crate::{Money, Result, TransactionKind};

use std::fmt;

use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Immutable log entry, produced only by a successfully applied transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "{}: {} ({})",
            self.kind,
            self.amount,
            self.timestamp.format(TIMESTAMP_FORMAT)
        );
    }
}

/// Append-only, insertion-ordered log of the transactions applied to one account
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionHistory {
    records: Vec<HistoryRecord>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) -> usize {
        let index = self.records.len();

        self.records.push(record);

        index
    }

    pub fn get_by_index(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> + '_ {
        self.records.iter()
    }

    /// Fresh traversal over the records in insertion order, keeping only `kind` when given
    pub fn filtered(
        &self,
        kind: Option<TransactionKind>,
    ) -> impl Iterator<Item = &HistoryRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| kind.map_or(true, |kind| record.kind == kind))
    }

    /// Same as `filtered`, matching the kind by its label regardless of case
    pub fn filtered_by_label(
        &self,
        label: Option<&str>,
    ) -> Result<impl Iterator<Item = &HistoryRecord> + '_> {
        let kind = label.map(str::parse::<TransactionKind>).transpose()?;

        Ok(self.filtered(kind))
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.filtered(Some(kind)).count()
    }

    pub fn total(&self, kind: TransactionKind) -> Result<Money> {
        self.filtered(Some(kind))
            .try_fold(Money::ZERO, |total, record| total.checked_add(record.amount))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    const SOME_AMOUNT: Money = Money(555_444);
    const OTHER_AMOUNT: Money = Money(1_000);

    fn build_record(kind: TransactionKind, amount: Money, second: u32) -> HistoryRecord {
        HistoryRecord {
            kind,
            amount,
            timestamp: Local.with_ymd_and_hms(2024, 3, 1, 10, 0, second).unwrap(),
        }
    }

    fn build_history(records: Vec<HistoryRecord>) -> TransactionHistory {
        let mut history = TransactionHistory::new();

        for record in records.into_iter() {
            history.append(record);
        }

        history
    }

    #[test]
    fn append() {
        let mut history = TransactionHistory::new();
        assert!(history.is_empty());

        let record1 = build_record(TransactionKind::Deposit, SOME_AMOUNT, 0);
        let record2 = build_record(TransactionKind::Withdrawal, OTHER_AMOUNT, 1);

        assert_eq!(history.append(record1.clone()), 0);
        assert_eq!(history.append(record2.clone()), 1);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_by_index(0), Some(&record1));
        assert_eq!(history.get_by_index(1), Some(&record2));
        assert!(history.get_by_index(2).is_none());
    }

    #[test]
    fn filtered() {
        let record1 = build_record(TransactionKind::Deposit, SOME_AMOUNT, 0);
        let record2 = build_record(TransactionKind::Withdrawal, OTHER_AMOUNT, 1);
        let record3 = build_record(TransactionKind::Deposit, OTHER_AMOUNT, 2);
        let record4 = build_record(TransactionKind::Withdrawal, SOME_AMOUNT, 3);

        let history = build_history(vec![
            record1.clone(),
            record2.clone(),
            record3.clone(),
            record4.clone(),
        ]);

        assert_eq!(
            history.filtered(None).collect::<Vec<_>>(),
            vec![&record1, &record2, &record3, &record4]
        );
        assert_eq!(
            history
                .filtered(Some(TransactionKind::Withdrawal))
                .collect::<Vec<_>>(),
            vec![&record2, &record4]
        );
        assert_eq!(
            history
                .filtered(Some(TransactionKind::Deposit))
                .collect::<Vec<_>>(),
            vec![&record1, &record3]
        );
    }

    #[test]
    fn filtered_is_restartable() {
        let history = build_history(vec![
            build_record(TransactionKind::Withdrawal, SOME_AMOUNT, 0),
            build_record(TransactionKind::Withdrawal, OTHER_AMOUNT, 1),
        ]);

        let mut first = history.filtered(Some(TransactionKind::Withdrawal));
        first.next();

        let second = history.filtered(Some(TransactionKind::Withdrawal));

        assert_eq!(second.count(), 2);
        assert_eq!(first.count(), 1);
    }

    #[test]
    fn filtered_by_label() {
        let record1 = build_record(TransactionKind::Deposit, SOME_AMOUNT, 0);
        let record2 = build_record(TransactionKind::Withdrawal, OTHER_AMOUNT, 1);

        let history = build_history(vec![record1.clone(), record2.clone()]);

        assert_eq!(
            history
                .filtered_by_label(Some("WITHDRAWAL"))
                .unwrap()
                .collect::<Vec<_>>(),
            vec![&record2]
        );
        assert_eq!(
            history
                .filtered_by_label(Some("deposit"))
                .unwrap()
                .collect::<Vec<_>>(),
            vec![&record1]
        );
        assert_eq!(history.filtered_by_label(None).unwrap().count(), 2);

        assert!(history.filtered_by_label(Some("transfer")).is_err());
    }

    #[test]
    fn count_and_total() {
        let history = build_history(vec![
            build_record(TransactionKind::Deposit, SOME_AMOUNT, 0),
            build_record(TransactionKind::Withdrawal, OTHER_AMOUNT, 1),
            build_record(TransactionKind::Withdrawal, OTHER_AMOUNT, 2),
        ]);

        assert_eq!(history.count(TransactionKind::Deposit), 1);
        assert_eq!(history.count(TransactionKind::Withdrawal), 2);

        assert_eq!(history.total(TransactionKind::Deposit).unwrap(), SOME_AMOUNT);
        assert_eq!(
            history.total(TransactionKind::Withdrawal).unwrap(),
            Money(2_000)
        );
    }

    #[test]
    fn display_record() {
        let record = build_record(TransactionKind::Withdrawal, Money::units(50), 7);

        assert_eq!(record.to_string(), "Withdrawal: 50.00 (01-03-2024 10:00:07)");
    }
}
