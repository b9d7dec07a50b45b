//! Savings planner view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::regions::*;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{inner, FormLayout};

use super::form::render_fields;
use super::{advisory_lines, bar, panel, result_line};

/// Render the savings planner
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.savings;
    let focused = app.focused_panel == FocusedPanel::Main;
    let layout = FormLayout::new(area, form.inputs.len() as u16);

    frame.render_widget(panel("Savings planner", focused), layout.fields);
    render_fields(frame, form, inner(layout.fields), focused);

    let results = panel("Plan", false);
    let results_area = results.inner(layout.results);
    frame.render_widget(results, layout.results);

    let surface = &form.surface;
    if !surface.is_visible(SAVINGS_RESULTS) {
        frame.render_widget(
            Paragraph::new("Fill in the goal and term, then press Enter."),
            results_area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Figures
            Constraint::Length(2), // Timeline
            Constraint::Min(0),    // Feasibility
        ])
        .split(results_area);

    let figures = vec![
        result_line(surface, "Goal", SAVINGS_GOAL),
        result_line(surface, "Already saved", SAVINGS_SAVED),
        result_line(surface, "Still to save", SAVINGS_REMAINING),
        result_line(surface, "Monthly", SAVINGS_MONTHLY),
        result_line(surface, "Weekly", SAVINGS_WEEKLY),
        result_line(surface, "Term", SAVINGS_TERM),
    ];
    frame.render_widget(Paragraph::new(figures), chunks[0]);

    let timeline = format!(
        "{} -> {}",
        surface.text(SAVINGS_START).unwrap_or("-"),
        surface.text(SAVINGS_END).unwrap_or("-")
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(chunks[1]);
    bar(frame, rows[0], surface, SAVINGS_TIMELINE_BAR, &timeline, Color::Cyan);

    if surface.is_visible(FEASIBILITY_SECTION) {
        let mut lines = vec![Line::from("Feasibility")];
        lines.extend(advisory_lines(surface, FEASIBILITY_CONTENT));
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[2],
        );
    }
}
