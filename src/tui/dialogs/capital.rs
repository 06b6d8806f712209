//! Update Capital dialog
//!
//! Three numeric fields, one per account. Submitting replaces the whole
//! capital set at once.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::actions::Action;
use crate::models::{Account, CapitalSet, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the capital form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapitalFormState {
    /// Focused account field
    pub focused: Account,
    /// One input per account, in [`Account::ALL`] order
    pub inputs: [TextInput; 3],
    pub error_message: Option<String>,
}

impl Default for CapitalFormState {
    fn default() -> Self {
        Self::from_capital(&CapitalSet::default())
    }
}

impl CapitalFormState {
    /// Form pre-filled with the current capital
    pub fn from_capital(capital: &CapitalSet) -> Self {
        let input = |account: Account| {
            TextInput::numeric()
                .label(format!("{} Capital", account))
                .placeholder("0")
                .content(capital.get(account).to_input_string())
        };

        Self {
            focused: Account::Cash,
            inputs: [
                input(Account::Cash),
                input(Account::Bank),
                input(Account::Savings),
            ],
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focused.index()]
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Parse all three fields into a Set Capital action
    pub fn build_action(&self) -> Result<Action, String> {
        let parse = |account: Account| -> Result<Money, String> {
            self.inputs[account.index()]
                .money()
                .map_err(|e| format!("{}: {}", account, e))
        };

        Ok(Action::SetCapital {
            cash: parse(Account::Cash)?,
            bank: parse(Account::Bank)?,
            savings: parse(Account::Savings)?,
        })
    }
}

/// Render the capital dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Update Capital ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Cash
            Constraint::Length(1), // Bank
            Constraint::Length(1), // Savings
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.capital_form;
    for account in Account::ALL {
        let line = form.inputs[account.index()].line(form.focused == account);
        frame.render_widget(Paragraph::new(line), chunks[1 + account.index()]);
    }

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[5],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" ±{}  ", app.settings.capital_step)),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Update  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

/// Handle key input for the capital dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let step = app.settings.capital_step();
    let form = &mut app.capital_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => submit(app),
        KeyCode::Up => {
            form.clear_error();
            form.focused_input().step_up(step);
        }
        KeyCode::Down => {
            form.clear_error();
            form.focused_input().step_down(step);
        }
        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
        }
        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
        }
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) => {
            form.clear_error();
            if !form.focused_input().insert(c) {
                app.warn(format!("'{}' is not allowed in an amount", c));
            }
        }
        _ => return false,
    }

    true
}

/// Validate the form and apply it to the session
fn submit(app: &mut App) {
    match app.capital_form.build_action() {
        Ok(action) => {
            app.dispatch(action);
            app.close_dialog();
        }
        Err(e) => app.capital_form.set_error(e),
    }
}
