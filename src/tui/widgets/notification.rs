//! Alert widget
//!
//! Renders the current [`Notification`] as a bordered toast.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::alert::Notification;
use crate::models::Tone;

/// Color used for a tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Blue,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
    }
}

fn tone_title(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "Info",
        Tone::Success => "Success",
        Tone::Warning => "Warning",
        Tone::Danger => "Error",
    }
}

/// Widget for rendering an alert
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    now: Instant,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, now: Instant) -> Self {
        Self { notification, now }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tone = self.notification.tone;
        let color = tone_color(tone);

        Clear.render(area, buf);

        // Countdown dots in the bottom border
        let dots = (self.notification.remaining_fraction(self.now) * 8.0).ceil() as usize;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", tone.icon(), tone_title(tone)))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .title_bottom("·".repeat(dots));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);

        paragraph.render(area, buf);
    }
}
