//! Add Spending dialog
//!
//! Date, account, category and amount for a single ledger entry.

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::actions::Action;
use crate::models::{Account, Category, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{selector_line, TextInput};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which field in the spending form is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpendingField {
    #[default]
    Date,
    Account,
    Category,
    Amount,
}

impl SpendingField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Account,
            Self::Account => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Account => Self::Date,
            Self::Category => Self::Account,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the spending form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingFormState {
    pub focused_field: SpendingField,
    pub date_input: TextInput,
    pub account: Account,
    pub category: Category,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for SpendingFormState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl SpendingFormState {
    /// Empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focused_field: SpendingField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format(DATE_FORMAT).to_string()),
            account: Account::default(),
            category: Category::default(),
            amount_input: TextInput::numeric().label("Amount").placeholder("0"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input under focus, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            SpendingField::Date => Some(&mut self.date_input),
            SpendingField::Amount => Some(&mut self.amount_input),
            SpendingField::Account | SpendingField::Category => None,
        }
    }

    /// Whether the focused field is a closed-choice selector
    pub fn on_selector(&self) -> bool {
        matches!(
            self.focused_field,
            SpendingField::Account | SpendingField::Category
        )
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    fn parse_date(&self) -> Result<NaiveDate, String> {
        let text = self.date_input.value().trim();
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| format!("Invalid date: {} (use YYYY-MM-DD)", text))
    }

    /// Move the date by one day in either direction; unparseable text is
    /// left alone
    fn shift_date(&mut self, forward: bool) {
        if let Ok(date) = self.parse_date() {
            let shifted = if forward {
                date.checked_add_days(Days::new(1))
            } else {
                date.checked_sub_days(Days::new(1))
            };
            if let Some(shifted) = shifted {
                self.date_input
                    .set_content(shifted.format(DATE_FORMAT).to_string());
            }
        }
    }

    /// Up: next day, next choice, or one step more
    pub fn increment(&mut self, step: Money) {
        match self.focused_field {
            SpendingField::Date => self.shift_date(true),
            SpendingField::Account => self.account = self.account.next(),
            SpendingField::Category => self.category = self.category.next(),
            SpendingField::Amount => self.amount_input.step_up(step),
        }
    }

    /// Down: previous day, previous choice, or one step less
    pub fn decrement(&mut self, step: Money) {
        match self.focused_field {
            SpendingField::Date => self.shift_date(false),
            SpendingField::Account => self.account = self.account.prev(),
            SpendingField::Category => self.category = self.category.prev(),
            SpendingField::Amount => self.amount_input.step_down(step),
        }
    }

    /// Validate the form into an Add Spending action
    pub fn build_action(&self) -> Result<Action, String> {
        let date = self.parse_date()?;
        let amount = self
            .amount_input
            .money()
            .map_err(|e| e.to_string())?;

        Ok(Action::AddSpending {
            date,
            account: self.account,
            category: self.category,
            amount,
        })
    }
}

/// Render the spending dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Spending ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Date
            Constraint::Length(1), // Account
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.spending_form;
    let focused = form.focused_field;

    frame.render_widget(
        Paragraph::new(form.date_input.line(focused == SpendingField::Date)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(selector_line(
            "Account",
            form.account.name(),
            focused == SpendingField::Account,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(selector_line(
            "Category",
            form.category.label(),
            focused == SpendingField::Category,
        )),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(form.amount_input.line(focused == SpendingField::Amount)),
        chunks[4],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[6],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Handle key input for the spending dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let step = app.settings.amount_step();
    let form = &mut app.spending_form;

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
            form.increment(step);
        }
        KeyCode::Down => {
            form.clear_error();
            form.decrement(step);
        }
        KeyCode::Left if form.on_selector() => form.decrement(step),
        KeyCode::Right if form.on_selector() => form.increment(step),
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Char(c) => {
            form.clear_error();
            let accepted = form.focused_input().map_or(true, |input| input.insert(c));
            if !accepted {
                app.warn(format!("'{}' is not allowed in an amount", c));
            }
        }
        _ => return false,
    }

    true
}

/// Validate the form and append the entry
fn submit(app: &mut App) {
    match app.spending_form.build_action() {
        Ok(action) => {
            app.dispatch(action);
            app.close_dialog();
        }
        Err(e) => app.spending_form.set_error(e),
    }
}
