//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::Settings;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!(title = %settings.title, "session started");

    let mut app = App::new(settings);
    let result = run_loop(&mut terminal, &mut app);
    info!(entries = app.entry_count(), "session ended");

    finish(result, restore_terminal())
}

/// Combine the loop outcome with the terminal restore. A loop error wins and
/// carries a failed restore as context.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Ok(()), restored) => restored,
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            Err(e.context(format!("failed to restore terminal: {}", restore_err)))
        }
    }
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new(app.settings.tick_rate());

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events.next()?;
        handle_event(app, event);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_keeps_loop_error() {
        let err = finish(Err(anyhow!("draw failed")), Err(anyhow!("tty gone"))).unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();

        assert_eq!(
            chain,
            vec!["failed to restore terminal: tty gone", "draw failed"]
        );
        assert_eq!(err.root_cause().to_string(), "draw failed");
    }

    #[test]
    fn test_finish_reports_restore_failure() {
        let err = finish(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");

        let err = finish(Err(anyhow!("draw failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
