//! Application state for the TUI
//!
//! The App struct owns the session for this run and holds all state needed
//! for rendering and handling events.

use crate::actions::Action;
use crate::config::Settings;
use crate::session::Session;

use super::dialogs::capital::CapitalFormState;
use super::dialogs::spending::SpendingFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which tab of the main panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Ledger,
    Distribution,
    Trend,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Ledger, ActiveTab::Distribution, ActiveTab::Trend];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Ledger => "Ledger",
            Self::Distribution => "Distribution",
            Self::Trend => "Daily trend",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Ledger => 0,
            Self::Distribution => 1,
            Self::Trend => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    UpdateCapital,
    AddSpending,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Ledger and capital for this run
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently shown tab
    pub active_tab: ActiveTab,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the ledger table
    pub selected_entry_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toasts for confirmations
    pub notifications: NotificationQueue,

    /// Capital form state
    pub capital_form: CapitalFormState,

    /// Spending form state
    pub spending_form: SpendingFormState,
}

impl<'a> App<'a> {
    /// Create a new App with an empty session
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_session(settings, Session::new())
    }

    /// Create an App around an existing session
    pub fn with_session(settings: &'a Settings, session: Session) -> Self {
        Self {
            settings,
            session,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            selected_entry_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
            capital_form: CapitalFormState::default(),
            spending_form: SpendingFormState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::UpdateCapital => {
                self.capital_form = CapitalFormState::from_capital(&self.session.get_capital());
            }
            ActiveDialog::AddSpending => {
                self.spending_form = SpendingFormState::default();
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Apply a submitted form to the session and announce the result
    pub fn dispatch(&mut self, action: Action) {
        let adds_entry = matches!(action, Action::AddSpending { .. });
        let confirmation = self.session.apply(action);
        let message = confirmation.message(&self.settings.currency_suffix);

        if adds_entry {
            self.select_last();
        }

        self.notifications.push(Notification::success(message.clone()));
        self.set_status(message);
    }

    /// Show a short-lived warning without touching the session
    pub fn warn(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::warning(message));
    }

    /// Number of rows in the ledger table
    pub fn entry_count(&self) -> usize {
        self.session.get_entries().len()
    }

    /// Move the ledger selection up
    pub fn move_up(&mut self) {
        self.selected_entry_index = self.selected_entry_index.saturating_sub(1);
    }

    /// Move the ledger selection down
    pub fn move_down(&mut self) {
        if self.selected_entry_index + 1 < self.entry_count() {
            self.selected_entry_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_entry_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_entry_index = self.entry_count().saturating_sub(1);
    }

    /// Periodic housekeeping between events
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}
