//! Reports module
//!
//! Derived views over a session: balance summaries, amount distribution
//! per account and the daily spending trend.

pub mod balance;
pub mod daily_trend;
pub mod distribution;

pub use balance::{BalanceSummary, Direction};
pub use daily_trend::{DailyRow, DailyTrend};
pub use distribution::{AmountHistogram, DistributionView, HistogramBin};
