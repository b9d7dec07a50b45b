//! Help dialog
//!
//! Shows keyboard shortcuts for the menu and the active calculator

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch between menu and form"),
        key_line("F1-F3", "Switch calculator"),
        key_line("Esc", "Close menus and dismiss alerts"),
        Line::from(""),
        heading("Menu"),
        Line::from(""),
        key_line("j/k", "Move selection up/down"),
        key_line("Enter", "Open dropdown or follow link"),
        key_line("m", "Toggle the menu on narrow terminals"),
        key_line("1-3", "Jump to a calculator"),
        Line::from(""),
        heading(app.active_view.title()),
        Line::from(""),
        key_line("Up/Down", "Move between fields"),
        key_line("Enter", "Calculate"),
        key_line("Ctrl+u", "Clear field"),
        key_line("Ctrl+r", "Reset form"),
    ];

    match app.active_view {
        ActiveView::Savings => {
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Goal and term are required. Income and expenses enable the feasibility check.",
            ));
        }
        ActiveView::Budget => {
            lines.push(Line::from(""));
            lines.push(Line::from("Section totals update as you type."));
        }
        ActiveView::Goal => {
            lines.push(Line::from(""));
            lines.push(Line::from(
                "The target must be below income after expenses to be viable.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
