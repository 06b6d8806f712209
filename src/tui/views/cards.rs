//! Balance cards
//!
//! One rounded card per account with the current balance and the change
//! since the capital was set.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::config::Settings;
use crate::reports::{BalanceSummary, Direction};

/// Render the three balance cards
pub fn render(frame: &mut Frame, areas: [Rect; 3], summaries: &[BalanceSummary], settings: &Settings) {
    for (summary, area) in summaries.iter().zip(areas) {
        render_card(frame, area, summary, settings);
    }
}

fn render_card(frame: &mut Frame, area: Rect, summary: &BalanceSummary, settings: &Settings) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", summary.account),
            Style::default().fg(Color::Cyan),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let balance_color = if summary.current.is_negative() {
        Color::Red
    } else {
        Color::White
    };
    let delta_color = match summary.direction {
        Direction::NonNegative => Color::Green,
        Direction::Negative => Color::Red,
    };

    let lines = vec![
        Line::from(Span::styled(
            settings.format_money(summary.current),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            summary.delta_label(&settings.currency_suffix),
            Style::default().fg(delta_color),
        )),
        Line::from(Span::styled(
            format!("of {}", settings.format_money(summary.initial)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
