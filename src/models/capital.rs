//! Initial capital per account
//!
//! One field per account, so every account always has a capital value.

use super::account::Account;
use super::money::Money;

/// Initial balance of every account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapitalSet {
    pub cash: Money,
    pub bank: Money,
    pub savings: Money,
}

impl CapitalSet {
    pub fn new(cash: Money, bank: Money, savings: Money) -> Self {
        Self {
            cash,
            bank,
            savings,
        }
    }

    /// Capital of a single account
    pub fn get(&self, account: Account) -> Money {
        match account {
            Account::Cash => self.cash,
            Account::Bank => self.bank,
            Account::Savings => self.savings,
        }
    }

    /// Iterate `(account, capital)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Account, Money)> + '_ {
        Account::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}
