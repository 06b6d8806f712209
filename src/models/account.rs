//! Account model
//!
//! The tracker knows exactly three accounts. The set is closed: every spending
//! entry names one of them and every account carries an initial capital.

use std::fmt;

/// A named account that spending is logged against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Account {
    /// Cash/wallet
    #[default]
    Cash,
    /// Bank account
    Bank,
    /// Savings account
    Savings,
}

impl Account {
    /// All accounts in display order
    pub const ALL: [Account; 3] = [Account::Cash, Account::Bank, Account::Savings];

    /// Position of this account in [`Account::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Cash => 0,
            Self::Bank => 1,
            Self::Savings => 2,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Bank => "Bank",
            Self::Savings => "Savings",
        }
    }

    /// Next account, wrapping around (for selector widgets)
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous account, wrapping around
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
