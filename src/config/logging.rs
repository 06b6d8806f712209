//! Log file setup
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `logs/spending.log` under the base directory. `RUST_LOG` controls the
//! filter; the default level is `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

/// Install the global tracing subscriber writing to the log file
pub fn init_logging(paths: &TrackerPaths) -> TrackerResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| TrackerError::Io(format!("Failed to open log file: {}", e)))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TrackerError::Config(format!("Failed to initialize logging: {}", e)))
}
