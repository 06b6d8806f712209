//! Spending distribution
//!
//! A histogram of entry amounts for each account, with a fixed number of
//! equal-width bins spanning the smallest to the largest amount.

use crate::models::{Account, Money, SpendingEntry};

/// One histogram bar
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Lower edge in currency units (inclusive)
    pub lower: f64,
    /// Upper edge in currency units (exclusive, except for the last bin)
    pub upper: f64,
    /// Number of entries falling in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Short label for the bar, using the bin's lower edge. Bins narrower
    /// than one unit get one decimal place so neighbouring labels differ.
    pub fn label(&self) -> String {
        if self.upper - self.lower < 1.0 {
            format!("{:.1}", self.lower)
        } else {
            Money::from_cents((self.lower * 100.0).round() as i64).format_grouped("")
        }
    }
}

/// Histogram of one account's amounts
#[derive(Debug, Clone, PartialEq)]
pub struct AmountHistogram {
    pub account: Account,
    /// Empty when the account has no entries
    pub bins: Vec<HistogramBin>,
}

impl AmountHistogram {
    /// Bin the amounts of `account` into `bin_count` equal-width bins
    pub fn build(entries: &[SpendingEntry], account: Account, bin_count: usize) -> Self {
        let amounts: Vec<i64> = entries
            .iter()
            .filter(|e| e.account == account)
            .map(|e| e.amount.cents())
            .collect();

        let bin_count = bin_count.max(1);
        let (Some(&min), Some(&max)) = (amounts.iter().min(), amounts.iter().max()) else {
            return Self {
                account,
                bins: Vec::new(),
            };
        };

        // A single distinct value gets a one-unit wide range centred on it
        let (low, high) = if min == max {
            (min as f64 - 50.0, max as f64 + 50.0)
        } else {
            (min as f64, max as f64)
        };
        let width = (high - low) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for cents in amounts {
            let index = (((cents as f64 - low) / width).floor() as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: (low + width * i as f64) / 100.0,
                upper: (low + width * (i + 1) as f64) / 100.0,
                count,
            })
            .collect();

        Self { account, bins }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of entries counted
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Height of the tallest bar
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Histograms for every account
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionView {
    pub histograms: Vec<AmountHistogram>,
}

impl DistributionView {
    pub fn generate(entries: &[SpendingEntry], bin_count: usize) -> Self {
        Self {
            histograms: Account::ALL
                .into_iter()
                .map(|account| AmountHistogram::build(entries, account, bin_count))
                .collect(),
        }
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
            Category::Shopping,
            Money::from_units(units),
        )
    }

    #[test]
    fn test_account_without_entries_is_empty() {
        let entries = vec![entry(Account::Cash, 10)];
        let histogram = AmountHistogram::build(&entries, Account::Bank, 10);
        assert!(histogram.is_empty());
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn test_fixed_bin_count_and_total() {
        let entries: Vec<_> = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
            .into_iter()
            .map(|u| entry(Account::Cash, u))
            .collect();
        let histogram = AmountHistogram::build(&entries, Account::Cash, 10);

        assert_eq!(histogram.bins.len(), 10);
        assert_eq!(histogram.total(), 11);
        assert_eq!(histogram.bins[0].lower, 0.0);
        assert_eq!(histogram.bins[9].upper, 100.0);
        // The maximum lands in the last, right-closed bin
        assert_eq!(histogram.bins[9].count, 2);
        assert_eq!(histogram.bins[0].count, 1);
    }

    #[test]
    fn test_single_value_is_centred() {
        let entries = vec![entry(Account::Savings, 20), entry(Account::Savings, 20)];
        let histogram = AmountHistogram::build(&entries, Account::Savings, 10);

        assert_eq!(histogram.bins.len(), 10);
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.bins[5].count, 2);
        assert_eq!(histogram.bins[0].lower, 19.5);
    }

    #[test]
    fn test_zero_bin_count_is_clamped() {
        let entries = vec![entry(Account::Cash, 1), entry(Account::Cash, 3)];
        let histogram = AmountHistogram::build(&entries, Account::Cash, 0);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].count, 2);
    }

    #[test]
    fn test_view_has_one_histogram_per_account() {
        let entries = vec![entry(Account::Cash, 5), entry(Account::Bank, 7)];
        let view = DistributionView::generate(&entries, 5);

        let accounts: Vec<_> = view.histograms.iter().map(|h| h.account).collect();
        assert_eq!(accounts, Account::ALL.to_vec());
        assert!(view.histograms[2].is_empty());
    }

    #[test]
    fn test_bin_label() {
        let bin = HistogramBin {
            lower: 1500.0,
            upper: 2000.0,
            count: 3,
        };
        assert_eq!(bin.label(), "1,500");
    }

    #[test]
    fn test_narrow_bins_get_distinct_labels() {
        let entries = vec![entry(Account::Cash, 20)];
        let histogram = AmountHistogram::build(&entries, Account::Cash, 10);
        let labels: Vec<String> = histogram.bins.iter().map(|b| b.label()).collect();

        assert_eq!(labels[0], "19.5");
        assert_eq!(labels[9], "20.4");
        let mut distinct = labels.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), 10);
    }
}
