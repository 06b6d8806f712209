//! Configuration module for the spending tracker
//!
//! This module provides:
//! - Platform path resolution for the config file and logs
//! - Display settings loaded from `config.json`
//! - Log file setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
