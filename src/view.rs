//! Pure view of a session
//!
//! [`render`] derives everything the screen shows from a session snapshot.
//! It never mutates the session and keeps no state between calls, so two
//! calls on the same session give equal views.

use crate::config::Settings;
use crate::models::SpendingEntry;
use crate::reports::{BalanceSummary, DailyTrend, DistributionView};
use crate::session::Session;

/// Message shown instead of charts while the ledger is empty
pub const EMPTY_LEDGER_MESSAGE: &str = "Add some spending data to see visualizations.";

/// Chart area contents
#[derive(Debug, Clone, PartialEq)]
pub enum Charts {
    /// The ledger is empty; no chart is drawn
    Placeholder(String),
    Ready {
        distribution: DistributionView,
        trend: DailyTrend,
    },
}

impl Charts {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Everything the screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// One card per account
    pub summaries: Vec<BalanceSummary>,
    /// Raw ledger listing, insertion order
    pub entries: Vec<SpendingEntry>,
    pub charts: Charts,
}

/// Derive the view from the current session
pub fn render(session: &Session, settings: &Settings) -> View {
    let entries = session.get_entries();
    let capital = session.get_capital();

    let charts = if entries.is_empty() {
        Charts::Placeholder(EMPTY_LEDGER_MESSAGE.to_string())
    } else {
        Charts::Ready {
            distribution: DistributionView::generate(entries, settings.histogram_bins),
            trend: DailyTrend::generate(entries),
        }
    };

    View {
        summaries: BalanceSummary::all(&capital, entries),
        entries: entries.to_vec(),
        charts,
    }
}
