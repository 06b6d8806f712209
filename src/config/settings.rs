//! User settings for the spending tracker
//!
//! Display preferences only: page title, currency suffix, histogram bin
//! count, input step sizes and the UI tick rate. Settings are read from
//! `config.json` when it exists and fall back to defaults otherwise.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Title shown at the top of the screen
    #[serde(default = "default_title")]
    pub title: String,

    /// Suffix appended to formatted amounts
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Number of bins in each distribution histogram
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Up/Down step for the capital fields, in whole units
    #[serde(default = "default_capital_step")]
    pub capital_step: i64,

    /// Up/Down step for the amount field, in whole units
    #[serde(default = "default_amount_step")]
    pub amount_step: i64,

    /// How often the UI wakes up without input, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_title() -> String {
    "Spending Tracker".to_string()
}

fn default_currency_suffix() -> String {
    "KRW".to_string()
}

fn default_histogram_bins() -> usize {
    10
}

fn default_capital_step() -> i64 {
    100
}

fn default_amount_step() -> i64 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency_suffix: default_currency_suffix(),
            histogram_bins: default_histogram_bins(),
            capital_step: default_capital_step(),
            amount_step: default_amount_step(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        info!(path = %settings_path.display(), "settings loaded");
        Ok(settings.normalized())
    }

    /// Clamp values that would make the UI misbehave
    pub fn normalized(mut self) -> Self {
        self.histogram_bins = self.histogram_bins.max(1);
        self.capital_step = self.capital_step.max(1);
        self.amount_step = self.amount_step.max(1);
        self.tick_rate_ms = self.tick_rate_ms.max(10);
        self
    }

    pub fn capital_step(&self) -> Money {
        Money::from_units(self.capital_step)
    }

    pub fn amount_step(&self) -> Money {
        Money::from_units(self.amount_step)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Format an amount with the configured suffix
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_grouped(&self.currency_suffix)
    }
}
