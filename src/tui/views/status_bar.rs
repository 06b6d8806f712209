//! Status bar view
//!
//! Ledger size, the latest confirmation, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " c:Capital  a:Add  1-3:Tabs  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Paragraph::new(status_line(app, area.width)), area);
}

fn status_line(app: &App, width: u16) -> Line<'static> {
    let mut spans = vec![
        Span::styled(" Entries: ", Style::default().fg(Color::White)),
        Span::styled(
            app.entry_count().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = HINTS.chars().count();
    let padding_len = (width as usize).saturating_sub(left_len + hints_len);

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_are_right_aligned() {
        let settings = Settings::default();
        let app = App::new(&settings);
        let line = status_line(&app, 80);
        let rendered = text(&line);
        assert_eq!(rendered.chars().count(), 80);
        assert!(rendered.ends_with(HINTS));
    }

    #[test]
    fn test_shows_status_message() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_status("Capital updated");
        let rendered = text(&status_line(&app, 40));
        assert!(rendered.contains("Capital updated"));
    }
}
