//! TUI Views module
//!
//! One view per calculator, plus the navigation menu and the status bar.
//! Calculator views draw from their form's surface: the same text regions
//! and bar widths the surface renderer writes.

pub mod budget;
pub mod form;
pub mod goal;
pub mod savings;
pub mod sidebar;
pub mod status_bar;

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::display::parse_advisory_lines;
use crate::models::Tone;
use crate::surface::MemorySurface;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::notification::tone_color;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area(), &app.nav);

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Savings => savings::render(frame, app, layout.main),
        ActiveView::Budget => budget::render(frame, app, layout.main),
        ActiveView::Goal => goal::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.alerts.current() {
        frame.render_widget(
            NotificationWidget::new(notification, Instant::now()),
            toast_rect(layout.main),
        );
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Bordered panel, highlighted when focused
pub(crate) fn panel(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// `label  value` line for a result region
pub(crate) fn result_line(surface: &MemorySurface, label: &str, region: &str) -> Line<'static> {
    let value = surface.text(region).unwrap_or("-").to_string();
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// Lines for an advisory region, title colored by tone
pub(crate) fn advisory_lines(surface: &MemorySurface, region: &str) -> Vec<Line<'static>> {
    let Some(block) = surface.text(region) else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    for (tone, title, text) in parse_advisory_lines(block) {
        let tone = Tone::parse(tone).unwrap_or(Tone::Info);
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", tone.icon()),
                Style::default().fg(tone_color(tone)),
            ),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(tone_color(tone))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("    {}", text)));
    }
    lines
}

/// Bar for a width region, labelled with a percent region
pub(crate) fn bar(
    frame: &mut Frame,
    area: Rect,
    surface: &MemorySurface,
    width_region: &str,
    label: &str,
    color: Color,
) {
    let ratio = surface.width(width_region).unwrap_or(0.0) / 100.0;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label.to_string());
    frame.render_widget(gauge, area);
}
