//! Daily trend view
//!
//! Line chart of the per-day totals, one series per account that has
//! entries.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::config::Settings;
use crate::reports::DailyTrend;

use super::account_color;

/// Render the trend chart
pub fn render(frame: &mut Frame, area: Rect, trend: &DailyTrend, settings: &Settings) {
    let series: Vec<(String, Color, Vec<(f64, f64)>)> = trend
        .columns
        .iter()
        .map(|account| {
            (
                account.to_string(),
                account_color(*account),
                trend.series(*account),
            )
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(name.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let (x_max, y_max) = bounds(trend);
    let first = trend
        .first_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let last = trend
        .last_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let axis_style = Style::default().fg(Color::DarkGray);
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Daily spending ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(settings.format_money(trend.max_total())),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Axis upper bounds; a single day or an all-zero ledger still gets a
/// non-empty range
fn bounds(trend: &DailyTrend) -> (f64, f64) {
    let days = match (trend.first_date(), trend.last_date()) {
        (Some(first), Some(last)) => (last - first).num_days() as f64,
        _ => 0.0,
    };
    (days.max(1.0), trend.max_total().as_f64().max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Category, Money, SpendingEntry};
    use chrono::NaiveDate;

    fn entry(day: u32, units: i64) -> SpendingEntry {
        SpendingEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Account::Cash,
            Category::Food,
            Money::from_units(units),
        )
    }

    #[test]
    fn test_bounds_single_day() {
        let trend = DailyTrend::generate(&[entry(1, 0)]);
        assert_eq!(bounds(&trend), (1.0, 1.0));
    }

    #[test]
    fn test_bounds_span() {
        let trend = DailyTrend::generate(&[entry(1, 40), entry(5, 10), entry(5, 15)]);
        assert_eq!(bounds(&trend), (4.0, 40.0));
    }
}
