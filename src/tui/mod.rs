//! Terminal User Interface module
//!
//! Balance cards, a tabbed main panel with the ledger and both charts, and
//! modal forms for updating capital and adding spending.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
