//! Toast notification widget
//!
//! Shows form confirmations for a few seconds in the top-right corner.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Success message
    Success,
    /// Rejected input
    Warning,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => " + Success ",
            Self::Warning => " ! Warning ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Short-lived warning, e.g. for a rejected keystroke
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning).with_duration(Duration::from_millis(1500))
    }

    /// Set how long the notification stays on screen
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(self.notification.notification_type.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Area for a toast in the top-right corner of `area`
pub fn notification_area(area: Rect) -> Rect {
    let width = 48.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

/// A queue of notifications, shown oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop the current notification once it has expired
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Saved");
        assert_eq!(n.message, "Saved");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_queue_drops_expired() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::warning("old").with_duration(Duration::ZERO));
        queue.push(Notification::success("new"));
        assert_eq!(queue.notifications.len(), 2);

        queue.remove_expired();

        assert_eq!(queue.notifications.len(), 1);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("new"));
    }

    #[test]
    fn test_notification_area_fits() {
        let area = Rect::new(0, 0, 30, 2);
        let toast = notification_area(area);
        assert_eq!(toast, Rect::new(0, 0, 30, 2));

        let wide = notification_area(Rect::new(0, 0, 100, 40));
        assert_eq!(wide, Rect::new(52, 0, 48, 4));
    }
}
