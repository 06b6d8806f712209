//! Form controller
//!
//! Each submitted form becomes an [`Action`]. Applying an action is the only
//! way a [`Session`] changes, and every applied action yields a
//! [`Confirmation`] for the user.

use chrono::NaiveDate;
use tracing::info;

use crate::models::{Account, CapitalSet, Category, Money, SpendingEntry};
use crate::session::Session;

/// A submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// "Update Capital": replace all three capitals at once
    SetCapital {
        cash: Money,
        bank: Money,
        savings: Money,
    },
    /// "Add Spending": append one entry to the ledger
    AddSpending {
        date: NaiveDate,
        account: Account,
        category: Category,
        amount: Money,
    },
}

/// What the user is told after an action was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    CapitalUpdated(CapitalSet),
    SpendingAdded(SpendingEntry),
}

impl Confirmation {
    /// Render the confirmation text with the configured currency suffix
    pub fn message(&self, currency_suffix: &str) -> String {
        match self {
            Self::CapitalUpdated(capital) => {
                let parts: Vec<String> = capital
                    .iter()
                    .map(|(account, amount)| {
                        format!("{} {}", account, amount.format_grouped(currency_suffix))
                    })
                    .collect();
                format!("Capital updated: {}", parts.join(", "))
            }
            Self::SpendingAdded(entry) => format!(
                "Added {} to {} for {} on {}",
                entry.amount.format_grouped(currency_suffix),
                entry.account,
                entry.category,
                entry.date.format("%Y-%m-%d")
            ),
        }
    }
}

impl Session {
    /// Apply an action in place
    pub fn apply(&mut self, action: Action) -> Confirmation {
        match action {
            Action::SetCapital {
                cash,
                bank,
                savings,
            } => {
                let capital = CapitalSet::new(cash, bank, savings);
                self.set_capital(capital);
                info!(%cash, %bank, %savings, "capital updated");
                Confirmation::CapitalUpdated(capital)
            }
            Action::AddSpending {
                date,
                account,
                category,
                amount,
            } => {
                let entry = SpendingEntry::new(date, account, category, amount);
                self.append_entry(entry.clone());
                info!(
                    %date,
                    %account,
                    %category,
                    %amount,
                    ledger_len = self.get_entries().len(),
                    "spending added"
                );
                Confirmation::SpendingAdded(entry)
            }
        }
    }
}

/// State transition: consume a session and an action, return the next session
pub fn update(mut session: Session, action: Action) -> (Session, Confirmation) {
    let confirmation = session.apply(action);
    (session, confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_set_capital_is_atomic() {
        let (session, _) = update(
            Session::new(),
            Action::SetCapital {
                cash: Money::from_units(5),
                bank: Money::from_units(5),
                savings: Money::from_units(5),
            },
        );

        let (session, confirmation) = update(
            session,
            Action::SetCapital {
                cash: Money::from_units(10),
                bank: Money::from_units(20),
                savings: Money::from_units(30),
            },
        );

        let expected = CapitalSet::new(
            Money::from_units(10),
            Money::from_units(20),
            Money::from_units(30),
        );
        assert_eq!(session.get_capital(), expected);
        assert_eq!(confirmation, Confirmation::CapitalUpdated(expected));
    }

    #[test]
    fn test_add_spending_appends_exactly_one() {
        let mut session = Session::new();
        for i in 0..3 {
            let before = session.get_entries().len();
            session.apply(Action::AddSpending {
                date: date(2024, 1, 1),
                account: Account::Bank,
                category: Category::Gaming,
                amount: Money::from_units(i),
            });
            assert_eq!(session.get_entries().len(), before + 1);
        }
    }

    #[test]
    fn test_zero_amount_is_recorded() {
        let (session, _) = update(
            Session::new(),
            Action::AddSpending {
                date: date(2024, 3, 9),
                account: Account::Savings,
                category: Category::Others,
                amount: Money::zero(),
            },
        );
        assert_eq!(session.get_entries().len(), 1);
        assert!(session.get_entries()[0].amount.is_zero());
    }

    #[test]
    fn test_add_spending_does_not_touch_capital() {
        let mut session = Session::new();
        session.apply(Action::SetCapital {
            cash: Money::from_units(100),
            bank: Money::zero(),
            savings: Money::zero(),
        });
        session.apply(Action::AddSpending {
            date: date(2024, 1, 1),
            account: Account::Cash,
            category: Category::Food,
            amount: Money::from_units(40),
        });
        assert_eq!(session.get_capital().cash, Money::from_units(100));
    }

    #[test]
    fn test_confirmation_messages() {
        let added = Confirmation::SpendingAdded(SpendingEntry::new(
            date(2024, 1, 2),
            Account::Cash,
            Category::Drinks,
            Money::from_units(4500),
        ));
        assert_eq!(
            added.message("KRW"),
            "Added 4,500 KRW to Cash for Drinks on 2024-01-02"
        );

        let capital = Confirmation::CapitalUpdated(CapitalSet::new(
            Money::from_units(10),
            Money::from_units(20_000),
            Money::from_units(0),
        ));
        assert_eq!(
            capital.message("KRW"),
            "Capital updated: Cash 10 KRW, Bank 20,000 KRW, Savings 0 KRW"
        );
    }
}
