//! Core data models for the spending tracker
//!
//! Accounts, categories, money, spending entries and the per-account
//! initial capital.

pub mod account;
pub mod capital;
pub mod category;
pub mod entry;
pub mod money;

pub use account::Account;
pub use capital::CapitalSet;
pub use category::Category;
pub use entry::SpendingEntry;
pub use money::{Money, MoneyParseError};
