//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog first, then to the main screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        // The next draw picks up the new size
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

/// Handle keys on the main screen
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Forms
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::UpdateCapital),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddSpending),

        // Tabs
        KeyCode::Char('1') => app.switch_tab(ActiveTab::Ledger),
        KeyCode::Char('2') => app.switch_tab(ActiveTab::Distribution),
        KeyCode::Char('3') => app.switch_tab(ActiveTab::Trend),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.switch_tab(app.active_tab.prev())
        }
        KeyCode::Tab => app.switch_tab(app.active_tab.next()),
        KeyCode::BackTab => app.switch_tab(app.active_tab.prev()),

        // Ledger navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes help
            app.close_dialog();
        }
        ActiveDialog::UpdateCapital => {
            dialogs::capital::handle_key(app, key);
        }
        ActiveDialog::AddSpending => {
            dialogs::spending::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}
