//! Session state store
//!
//! Holds the ledger and the capital set for one run of the application.
//! The store performs no validation; the form controller in
//! [`crate::actions`] is the only writer.

use crate::models::{CapitalSet, SpendingEntry};

/// In-memory state of one interactive run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    entries: Vec<SpendingEntry>,
    capital: CapitalSet,
}

impl Session {
    /// Create an empty session: zero capital everywhere, empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// The ledger, in insertion order
    pub fn get_entries(&self) -> &[SpendingEntry] {
        &self.entries
    }

    /// The current capital set
    pub fn get_capital(&self) -> CapitalSet {
        self.capital
    }

    /// Append an entry to the end of the ledger
    pub fn append_entry(&mut self, entry: SpendingEntry) {
        self.entries.push(entry);
    }

    /// Replace the whole capital set
    pub fn set_capital(&mut self, capital: CapitalSet) {
        self.capital = capital;
    }

    /// Whether any spending has been logged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
