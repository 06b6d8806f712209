//! Dialog modules for the TUI
//!
//! Modal forms for the two kinds of input plus the help overlay

pub mod capital;
pub mod help;
pub mod spending;
