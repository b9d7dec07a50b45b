//! Savings target view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::regions::*;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{inner, FormLayout};

use super::form::render_fields;
use super::{advisory_lines, bar, panel, result_line};

/// Render the savings target check
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.goal;
    let focused = app.focused_panel == FocusedPanel::Main;
    let layout = FormLayout::new(area, form.inputs.len() as u16);

    frame.render_widget(panel("Savings target", focused), layout.fields);
    render_fields(frame, form, inner(layout.fields), focused);

    let results = panel("Check", false);
    let results_area = results.inner(layout.results);
    frame.render_widget(results, layout.results);

    let surface = &form.surface;
    if !surface.is_visible(GOAL_RESULTS) {
        frame.render_widget(
            Paragraph::new("Enter income, expenses and a target, then press Enter."),
            results_area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Figures
            Constraint::Length(2), // Expense bar
            Constraint::Length(2), // Status
            Constraint::Min(0),    // Advice
        ])
        .split(results_area);

    let figures = vec![
        result_line(surface, "Income", GOAL_INCOME),
        result_line(surface, "Expenses", GOAL_EXPENSES),
        result_line(surface, "Available", GOAL_AVAILABLE),
    ];
    frame.render_widget(Paragraph::new(figures), chunks[0]);

    let label = format!(
        "Expenses {} of income",
        surface.text(GOAL_EXPENSE_PCT).unwrap_or("-")
    );
    let bar_row = Rect { height: 1, ..chunks[1] };
    bar(frame, bar_row, surface, GOAL_EXPENSE_BAR, &label, Color::Yellow);

    let status = surface.text(GOAL_STATUS).unwrap_or("-");
    let status_color = if status.starts_with("Not viable") {
        Color::Red
    } else if status.starts_with("Tight") {
        Color::Yellow
    } else {
        Color::Green
    };
    frame.render_widget(
        Paragraph::new(status.to_string()).style(
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[2],
    );

    let mut lines = vec![Line::from("Advice")];
    lines.extend(advisory_lines(surface, GOAL_ADVICE));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[3]);
}
