//! TUI Views module
//!
//! Balance cards, the three tabs of the main panel and the status bar. The
//! screen is drawn from a fresh [`crate::view::View`] on every frame.

pub mod cards;
pub mod distribution;
pub mod ledger;
pub mod status_bar;
pub mod trend;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::models::Account;
use crate::view::{self, Charts};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let view = view::render(&app.session, app.settings);

    render_title(frame, app, layout.title);
    cards::render(frame, layout.cards, &view.summaries, app.settings);
    render_tabs(frame, app, layout.tabs);

    match (app.active_tab, &view.charts) {
        (ActiveTab::Ledger, _) => {
            ledger::render(
                frame,
                layout.main,
                &view.entries,
                app.selected_entry_index,
                app.settings,
            );
        }
        (_, Charts::Placeholder(message)) => {
            render_placeholder(frame, layout.main, app.active_tab.title(), message);
        }
        (ActiveTab::Distribution, Charts::Ready { distribution, .. }) => {
            distribution::render(frame, layout.main, distribution);
        }
        (ActiveTab::Trend, Charts::Ready { trend, .. }) => {
            trend::render(frame, layout.main, trend, app.settings);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }
}

/// Series and bar color for an account
pub fn account_color(account: Account) -> Color {
    match account {
        Account::Cash => Color::Yellow,
        Account::Bank => Color::Cyan,
        Account::Savings => Color::Magenta,
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.settings.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Shown in place of the charts while the ledger is empty
fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(text, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::UpdateCapital => dialogs::capital::render(frame, app),
        ActiveDialog::AddSpending => dialogs::spending::render(frame, app),
        ActiveDialog::None => {}
    }
}
