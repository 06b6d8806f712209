//! Event handling for the TUI
//!
//! Terminal events are polled on the UI thread with the tick rate as the
//! timeout. A `Tick` is produced whenever the tick interval passes without
//! input.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::error::{TrackerError, TrackerResult};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event source for the main loop
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next event, at most until the next tick is due
    pub fn next(&mut self) -> TrackerResult<Event> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout).map_err(|e| TrackerError::Tui(e.to_string()))? {
                match event::read().map_err(|e| TrackerError::Tui(e.to_string()))? {
                    // Key presses only; release events are dropped
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        return Ok(Event::Key(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        return Ok(Event::Resize(width, height));
                    }
                    _ => {}
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(Event::Tick);
            }
        }
    }
}
