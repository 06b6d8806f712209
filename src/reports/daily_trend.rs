//! Daily spending trend
//!
//! Sums spending per (date, account) and pivots it into one row per date
//! with one column per account seen in the ledger. Missing cells are zero.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Account, Money, SpendingEntry};

/// One row of the pivot table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRow {
    pub date: NaiveDate,
    /// Totals in the same order as [`DailyTrend::columns`]
    pub totals: Vec<Money>,
}

/// Per-day, per-account spending totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTrend {
    /// Accounts with at least one entry, in account order
    pub columns: Vec<Account>,
    /// Rows sorted by date, ascending
    pub rows: Vec<DailyRow>,
}

impl DailyTrend {
    /// Group, sum and pivot the ledger
    pub fn generate(entries: &[SpendingEntry]) -> Self {
        let mut grouped: BTreeMap<NaiveDate, BTreeMap<Account, Money>> = BTreeMap::new();
        for entry in entries {
            *grouped
                .entry(entry.date)
                .or_default()
                .entry(entry.account)
                .or_default() += entry.amount;
        }

        let columns: Vec<Account> = Account::ALL
            .into_iter()
            .filter(|account| entries.iter().any(|e| e.account == *account))
            .collect();

        let rows = grouped
            .into_iter()
            .map(|(date, by_account)| DailyRow {
                date,
                totals: columns
                    .iter()
                    .map(|account| by_account.get(account).copied().unwrap_or_default())
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// Look up one cell; `None` when the date or account is not in the table
    pub fn value(&self, date: NaiveDate, account: Account) -> Option<Money> {
        let column = self.columns.iter().position(|a| *a == account)?;
        self.rows
            .iter()
            .find(|row| row.date == date)
            .map(|row| row.totals[column])
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|row| row.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row.date)
    }

    /// Largest single cell, used as the y-axis bound
    pub fn max_total(&self) -> Money {
        self.rows
            .iter()
            .flat_map(|row| row.totals.iter().copied())
            .max()
            .unwrap_or_default()
    }

    /// Chart points for one account: x is days since the first date, y is
    /// the day's total in currency units
    pub fn series(&self, account: Account) -> Vec<(f64, f64)> {
        let (Some(column), Some(first)) = (
            self.columns.iter().position(|a| *a == account),
            self.first_date(),
        ) else {
            return Vec::new();
        };

        self.rows
            .iter()
            .map(|row| {
                let x = (row.date - first).num_days() as f64;
                (x, row.totals[column].as_f64())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn entry(d: u32, account: Account, category: Category, units: i64) -> SpendingEntry {
        SpendingEntry::new(date(d), account, category, Money::from_units(units))
    }

    #[test]
    fn test_pivot_fills_missing_with_zero() {
        let entries = vec![
            entry(1, Account::Cash, Category::Food, 50),
            entry(1, Account::Bank, Category::Food, 30),
            entry(2, Account::Cash, Category::Drinks, 20),
        ];
        let trend = DailyTrend::generate(&entries);

        assert_eq!(trend.columns, vec![Account::Cash, Account::Bank]);
        assert_eq!(trend.rows.len(), 2);
        assert_eq!(trend.rows[0].date, date(1));
        assert_eq!(trend.rows[1].date, date(2));
        assert_eq!(trend.value(date(1), Account::Cash), Some(Money::from_units(50)));
        assert_eq!(trend.value(date(1), Account::Bank), Some(Money::from_units(30)));
        assert_eq!(trend.value(date(2), Account::Cash), Some(Money::from_units(20)));
        assert_eq!(trend.value(date(2), Account::Bank), Some(Money::zero()));
        assert_eq!(trend.value(date(2), Account::Savings), None);
    }

    #[test]
    fn test_same_day_same_account_is_summed() {
        let entries = vec![
            entry(3, Account::Savings, Category::Gaming, 10),
            entry(3, Account::Savings, Category::Dating, 15),
        ];
        let trend = DailyTrend::generate(&entries);
        assert_eq!(trend.rows.len(), 1);
        assert_eq!(trend.value(date(3), Account::Savings), Some(Money::from_units(25)));
    }

    #[test]
    fn test_rows_are_sorted_by_date() {
        let entries = vec![
            entry(9, Account::Cash, Category::Food, 1),
            entry(2, Account::Cash, Category::Food, 1),
            entry(5, Account::Cash, Category::Food, 1),
        ];
        let trend = DailyTrend::generate(&entries);
        let dates: Vec<_> = trend.rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2), date(5), date(9)]);
        assert_eq!(trend.first_date(), Some(date(2)));
        assert_eq!(trend.last_date(), Some(date(9)));
    }

    #[test]
    fn test_series_uses_day_offsets() {
        let entries = vec![
            entry(1, Account::Cash, Category::Food, 50),
            entry(4, Account::Cash, Category::Food, 20),
            entry(4, Account::Bank, Category::Food, 70),
        ];
        let trend = DailyTrend::generate(&entries);

        assert_eq!(trend.series(Account::Cash), vec![(0.0, 50.0), (3.0, 20.0)]);
        assert_eq!(trend.series(Account::Bank), vec![(0.0, 0.0), (3.0, 70.0)]);
        assert!(trend.series(Account::Savings).is_empty());
        assert_eq!(trend.max_total(), Money::from_units(70));
    }

    #[test]
    fn test_empty_ledger() {
        let trend = DailyTrend::generate(&[]);
        assert!(trend.columns.is_empty());
        assert!(trend.rows.is_empty());
        assert_eq!(trend.max_total(), Money::zero());
    }

    #[test]
    fn test_large_daily_total_saturates() {
        let big = Money::from_cents(5_000_000_000_000_000_000);
        let entries = vec![
            SpendingEntry::new(date(1), Account::Cash, Category::Food, big),
            SpendingEntry::new(date(1), Account::Cash, Category::Food, big),
        ];
        let trend = DailyTrend::generate(&entries);

        assert_eq!(trend.value(date(1), Account::Cash), Some(Money::from_cents(i64::MAX)));
        assert_eq!(trend.max_total(), Money::from_cents(i64::MAX));
    }
}
