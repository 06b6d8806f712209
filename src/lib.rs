//! Spending Tracker - a terminal spending log for a single user
//!
//! Record what was spent from cash, a bank account or savings, and see how
//! much is left in each along with a histogram of amounts per account and a
//! daily trend line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and log setup
//! - `error`: Custom error types
//! - `models`: Money, accounts, categories and ledger entries
//! - `session`: The in-memory ledger and capital for one run
//! - `actions`: Form submissions and the state transition applying them
//! - `reports`: Balance summaries, amount histograms and the daily pivot
//! - `view`: Pure snapshot of everything the screen shows
//! - `tui`: Terminal interface
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spending_tracker::actions::{update, Action};
//! use spending_tracker::config::Settings;
//! use spending_tracker::models::{Account, Category, Money};
//! use spending_tracker::session::Session;
//! use spending_tracker::view;
//!
//! let (session, _) = update(
//!     Session::new(),
//!     Action::SetCapital {
//!         cash: Money::from_units(100),
//!         bank: Money::zero(),
//!         savings: Money::zero(),
//!     },
//! );
//! let (session, confirmation) = update(
//!     session,
//!     Action::AddSpending {
//!         date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         account: Account::Cash,
//!         category: Category::Food,
//!         amount: Money::from_units(30),
//!     },
//! );
//! assert_eq!(
//!     confirmation.message("KRW"),
//!     "Added 30 KRW to Cash for Food on 2024-01-01"
//! );
//!
//! let view = view::render(&session, &Settings::default());
//! assert_eq!(view.summaries[0].current, Money::from_units(70));
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod session;
pub mod tui;
pub mod view;

pub use error::{TrackerError, TrackerResult};
