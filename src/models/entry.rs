//! Spending entry model
//!
//! One row of the ledger. Entries are created by the Add Spending form and
//! never change afterwards.

use chrono::NaiveDate;
use std::fmt;

use super::account::Account;
use super::category::Category;
use super::money::Money;

/// A single logged spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingEntry {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Account the money came out of
    pub account: Account,

    /// What it was spent on
    pub category: Category,

    /// Amount spent (never negative)
    pub amount: Money,
}

impl SpendingEntry {
    pub fn new(date: NaiveDate, account: Account, category: Category, amount: Money) -> Self {
        Self {
            date,
            account,
            category,
            amount,
        }
    }
}

impl fmt::Display for SpendingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.account,
            self.category,
            self.amount
        )
    }
}
