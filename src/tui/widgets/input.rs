//! Text input widget
//!
//! A single-line input with a cursor. Numeric inputs only accept digits and
//! separators, so a minus sign can never be typed into an amount.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::models::{Money, MoneyParseError};

/// Width reserved for field labels in forms
pub const LABEL_WIDTH: usize = 10;

/// A simple text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Only accept digits, '.' and ','
    pub numeric: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder: String::new(),
            label: String::new(),
            numeric: false,
        }
    }

    /// Create a numeric input
    pub fn numeric() -> Self {
        Self {
            numeric: true,
            ..Self::new()
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Whether this input accepts the character
    pub fn accepts(&self, c: char) -> bool {
        !self.numeric || c.is_ascii_digit() || c == '.' || c == ','
    }

    /// Insert a character at the cursor; returns false if it was rejected
    pub fn insert(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Parse the content as an amount
    pub fn money(&self) -> Result<Money, MoneyParseError> {
        Money::parse(&self.content)
    }

    /// Value the step keys start from: oversized content counts as the
    /// maximum, anything else unparseable as zero
    fn step_base(&self) -> Money {
        match self.money() {
            Ok(amount) => amount,
            Err(MoneyParseError::TooLarge(_)) => Money::MAX_AMOUNT,
            Err(_) => Money::zero(),
        }
    }

    /// Add `step` to a numeric value, never going above [`Money::MAX_AMOUNT`]
    pub fn step_up(&mut self, step: Money) {
        let next = (self.step_base() + step).min(Money::MAX_AMOUNT);
        self.set_content(next.to_input_string());
    }

    /// Subtract `step` from a numeric value, never going below zero
    pub fn step_down(&mut self, step: Money) {
        let next = self.step_base().saturating_sub_to_zero(step);
        self.set_content(next.to_input_string());
    }

    /// Build the form line for this input: right-aligned label, value and,
    /// when focused, a block cursor
    pub fn line(&self, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = LABEL_WIDTH),
            label_style,
        )];

        if !focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(
                    self.content.clone(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }

        Line::from(spans)
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Form line for a closed-choice selector, e.g. `  Account: ◀ Cash ▶`
pub fn selector_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("{:>width$}: ", label, width = LABEL_WIDTH), label_style),
        Span::styled("◀ ", arrow_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", arrow_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axb");
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_numeric_rejects_minus() {
        let mut input = TextInput::numeric();
        assert!(!input.insert('-'));
        assert!(input.insert('1'));
        assert!(input.insert('.'));
        assert!(input.insert('5'));
        assert!(!input.insert('e'));
        assert_eq!(input.value(), "1.5");
        assert_eq!(input.money().unwrap(), Money::from_cents(150));
    }

    #[test]
    fn test_step_never_goes_below_zero() {
        let mut input = TextInput::numeric().content("30");
        input.step_down(Money::from_units(100));
        assert_eq!(input.value(), "0");
        input.step_up(Money::from_units(100));
        input.step_up(Money::from_units(100));
        assert_eq!(input.value(), "200");
    }

    #[test]
    fn test_step_up_stops_at_max_amount() {
        let mut input = TextInput::numeric().content("9,999,999,999,999.50");
        input.step_up(Money::from_units(100));
        assert_eq!(input.value(), "10000000000000");

        let mut input = TextInput::numeric().content("92233720368547758.07");
        input.step_up(Money::from_units(100));
        assert_eq!(input.money().unwrap(), Money::MAX_AMOUNT);
        input.step_down(Money::from_units(100));
        assert_eq!(input.value(), "9999999999900");
    }

    #[test]
    fn test_step_on_empty_starts_from_zero() {
        let mut input = TextInput::numeric();
        input.step_up(Money::from_units(10));
        assert_eq!(input.value(), "10");
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = TextInput::new().content("é1");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "1");
        input.move_end();
        input.insert('ü');
        assert_eq!(input.value(), "1ü");
    }

    #[test]
    fn test_line_shows_placeholder_when_unfocused() {
        let input = TextInput::new().label("Date").placeholder("YYYY-MM-DD");
        let text: String = input
            .line(false)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "      Date: YYYY-MM-DD");
    }
}
