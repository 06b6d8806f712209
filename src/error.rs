//! Custom error types for the spending tracker
//!
//! The domain itself has no failure modes worth naming (input controls
//! constrain values at the source, and form validation reports inline), so
//! these errors cover the ambient plumbing: configuration, file I/O and the
//! terminal.

use thiserror::Error;

/// The main error type for spending tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for spending tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
