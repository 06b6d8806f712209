//! Ledger view
//!
//! Raw listing of every entry in the order it was added

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::Settings;
use crate::models::SpendingEntry;

/// Shown while the ledger has no rows
pub const EMPTY_MESSAGE: &str = "No spending logged yet. Press 'a' to add one.";

/// Render the ledger table
pub fn render(
    frame: &mut Frame,
    area: Rect,
    entries: &[SpendingEntry],
    selected: usize,
    settings: &Settings,
) {
    let block = Block::default()
        .title(format!(" Ledger ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if entries.is_empty() {
        let text = Paragraph::new(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Account"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.date.format("%Y-%m-%d").to_string()),
                Cell::from(entry.account.name()),
                Cell::from(entry.category.label()),
                Cell::from(
                    Line::from(settings.format_money(entry.amount)).alignment(Alignment::Right),
                ),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Min(18),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected.min(entries.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
