//! Distribution view
//!
//! One histogram panel per account. Bars are labelled with the lower edge of
//! their bin.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{BarChart, Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::reports::{AmountHistogram, DistributionView};
use crate::tui::layout::three_columns;

use super::account_color;

/// Render the three histogram panels
pub fn render(frame: &mut Frame, area: Rect, distribution: &DistributionView) {
    for (histogram, column) in distribution.histograms.iter().zip(three_columns(area)) {
        render_histogram(frame, column, histogram);
    }
}

fn render_histogram(frame: &mut Frame, area: Rect, histogram: &AmountHistogram) {
    let color = account_color(histogram.account);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({}) ", histogram.account, histogram.total()),
            Style::default().fg(color),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if histogram.is_empty() {
        let text = Paragraph::new(Span::styled(
            "No entries",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let labels: Vec<String> = histogram.bins.iter().map(|bin| bin.label()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&histogram.bins)
        .map(|(label, bin)| (label.as_str(), bin.count as u64))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(bar_width(area.width, histogram.bins.len()))
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(chart, area);
}

/// Widest bar that still fits every bin inside the panel borders
fn bar_width(panel_width: u16, bins: usize) -> u16 {
    let bins = bins.max(1) as u16;
    let inner = panel_width.saturating_sub(2);
    (inner / bins).saturating_sub(1).max(1)
}
