//! Balance summary
//!
//! Current balance of each account: initial capital minus everything spent
//! from it.

use crate::models::{Account, CapitalSet, Money, SpendingEntry};

/// Whether the balance went up or down relative to the initial capital
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// delta >= 0
    NonNegative,
    /// delta < 0
    Negative,
}

impl Direction {
    pub fn of(delta: Money) -> Self {
        if delta.is_negative() {
            Self::Negative
        } else {
            Self::NonNegative
        }
    }

    /// Arrow shown next to the delta
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::NonNegative => "▲",
            Self::Negative => "▼",
        }
    }
}

/// One balance card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSummary {
    pub account: Account,
    /// Capital the account started with
    pub initial: Money,
    /// Total spent from this account
    pub spent: Money,
    /// initial - spent
    pub current: Money,
    /// current - initial
    pub delta: Money,
    pub direction: Direction,
}

impl BalanceSummary {
    /// Summarize one account
    pub fn for_account(capital: &CapitalSet, entries: &[SpendingEntry], account: Account) -> Self {
        let initial = capital.get(account);
        let spent: Money = entries
            .iter()
            .filter(|e| e.account == account)
            .map(|e| e.amount)
            .sum();
        let current = initial - spent;
        let delta = current - initial;

        Self {
            account,
            initial,
            spent,
            current,
            delta,
            direction: Direction::of(delta),
        }
    }

    /// Summaries for every account, in display order
    pub fn all(capital: &CapitalSet, entries: &[SpendingEntry]) -> Vec<Self> {
        Account::ALL
            .into_iter()
            .map(|account| Self::for_account(capital, entries, account))
            .collect()
    }

    /// Signed delta text, e.g. "▼ -1,500 KRW" or "▲ 0 KRW"
    pub fn delta_label(&self, currency_suffix: &str) -> String {
        format!(
            "{} {}",
            self.direction.arrow(),
            self.delta.format_grouped(currency_suffix)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn entry(account: Account, units: i64) -> SpendingEntry {
        SpendingEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            account,
            Category::Food,
            Money::from_units(units),
        )
    }

    fn capital() -> CapitalSet {
        CapitalSet::new(
            Money::from_units(1000),
            Money::from_units(5000),
            Money::from_units(200),
        )
    }

    #[test]
    fn test_current_is_capital_minus_spent() {
        let entries = vec![
            entry(Account::Cash, 50),
            entry(Account::Bank, 30),
            entry(Account::Cash, 20),
        ];
        let summaries = BalanceSummary::all(&capital(), &entries);

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].account, Account::Cash);
        assert_eq!(summaries[0].current, Money::from_units(930));
        assert_eq!(summaries[1].current, Money::from_units(4970));
        assert_eq!(summaries[2].current, Money::from_units(200));
    }

    #[test]
    fn test_delta_is_negative_spent() {
        let entries = vec![entry(Account::Savings, 75)];
        let summary = BalanceSummary::for_account(&capital(), &entries, Account::Savings);

        assert_eq!(summary.delta, -summary.spent);
        assert_eq!(summary.direction, Direction::Negative);
    }

    #[test]
    fn test_no_spending_is_non_negative() {
        let summary = BalanceSummary::for_account(&capital(), &[], Account::Bank);
        assert!(summary.delta.is_zero());
        assert_eq!(summary.direction, Direction::NonNegative);
        assert_eq!(summary.delta_label("KRW"), "▲ 0 KRW");
    }

    #[test]
    fn test_zero_amount_entry_keeps_delta_non_negative() {
        let entries = vec![entry(Account::Cash, 0)];
        let summary = BalanceSummary::for_account(&capital(), &entries, Account::Cash);
        assert_eq!(summary.direction, Direction::NonNegative);
    }

    #[test]
    fn test_overspending_goes_negative() {
        let entries = vec![entry(Account::Savings, 1500)];
        let summary = BalanceSummary::for_account(&capital(), &entries, Account::Savings);
        assert_eq!(summary.current, Money::from_units(-1300));
        assert_eq!(summary.delta_label("KRW"), "▼ -1,500 KRW");
    }

    #[test]
    fn test_large_entries_do_not_wrap() {
        let big = Money::from_cents(5_000_000_000_000_000_000);
        let entries = vec![
            SpendingEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                Account::Bank,
                Category::Food,
                big,
            ),
            SpendingEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                Account::Bank,
                Category::Food,
                big,
            ),
        ];
        let summary = BalanceSummary::for_account(&CapitalSet::default(), &entries, Account::Bank);

        assert_eq!(summary.spent.cents(), i64::MAX);
        assert!(summary.current.is_negative());
        assert_eq!(summary.direction, Direction::Negative);
    }
}
