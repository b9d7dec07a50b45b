//! Monthly budget view
//!
//! Income and expense fields with live section totals, then the evaluated
//! breakdown as three bars and the recommendations.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::regions::*;
use crate::surface::MemorySurface;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{inner, FormLayout};

use super::form::render_fields;
use super::{advisory_lines, bar, panel, result_line};

/// Render the budget view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.budget;
    let focused = app.focused_panel == FocusedPanel::Main;
    let field_rows = form.inputs.len() as u16;
    let layout = FormLayout::new(area, field_rows + 2);

    frame.render_widget(panel("Monthly budget", focused), layout.fields);
    let fields_area = inner(layout.fields);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(field_rows),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Running totals
        ])
        .split(fields_area);
    render_fields(frame, form, rows[0], focused);
    frame.render_widget(Paragraph::new(totals_line(&form.surface)), rows[2]);

    let results = panel("Breakdown", false);
    let results_area = results.inner(layout.results);
    frame.render_widget(results, layout.results);

    let surface = &form.surface;
    if !surface.is_visible(BUDGET_RESULTS) {
        frame.render_widget(
            Paragraph::new("Enter your income and expenses, then press Enter."),
            results_area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary
            Constraint::Length(4), // Bars
            Constraint::Min(0),    // Recommendations
        ])
        .split(results_area);

    let balance_color = match surface.text(BUDGET_BALANCE_SIGN) {
        Some("negative") => Color::Red,
        Some("positive") => Color::Green,
        _ => Color::Yellow,
    };
    let summary = vec![
        result_line(surface, "Income", BUDGET_INCOME),
        result_line(surface, "Expenses", BUDGET_EXPENSES),
        Line::from(vec![
            Span::styled(format!("{:<18}", "Balance"), Style::default().fg(Color::Gray)),
            Span::styled(
                surface.text(BUDGET_BALANCE).unwrap_or("-").to_string(),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    let bars = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(chunks[1]);
    let sections = [
        ("Fixed", BUDGET_FIXED_AMOUNT, BUDGET_FIXED_PCT, BUDGET_FIXED_BAR, Color::Yellow),
        (
            "Variable",
            BUDGET_VARIABLE_AMOUNT,
            BUDGET_VARIABLE_PCT,
            BUDGET_VARIABLE_BAR,
            Color::Magenta,
        ),
        (
            "Available",
            BUDGET_DISPOSABLE_AMOUNT,
            BUDGET_DISPOSABLE_PCT,
            BUDGET_DISPOSABLE_BAR,
            Color::Green,
        ),
    ];
    for (row, (name, amount, pct, width, color)) in bars.iter().zip(sections) {
        let label = format!(
            "{} {} ({})",
            name,
            surface.text(amount).unwrap_or("-"),
            surface.text(pct).unwrap_or("-")
        );
        bar(frame, *row, surface, width, &label, color);
    }

    let mut lines = vec![Line::from("Recommendations")];
    lines.extend(advisory_lines(surface, BUDGET_RECOMMENDATIONS));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);
}

/// Running totals, refreshed on every keystroke
fn totals_line(surface: &MemorySurface) -> Line<'static> {
    let value = |region: &str| surface.text(region).unwrap_or("$0").to_string();
    Line::from(vec![
        Span::styled("Income ", Style::default().fg(Color::Gray)),
        Span::styled(value(BUDGET_TOTAL_INCOME), Style::default().fg(Color::Green)),
        Span::raw("  │  "),
        Span::styled("Fixed ", Style::default().fg(Color::Gray)),
        Span::styled(value(BUDGET_TOTAL_FIXED), Style::default().fg(Color::Yellow)),
        Span::raw("  │  "),
        Span::styled("Variable ", Style::default().fg(Color::Gray)),
        Span::styled(value(BUDGET_TOTAL_VARIABLE), Style::default().fg(Color::Magenta)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render_budget_totals;
    use crate::models::{CurrencyFormat, Money};
    use crate::services::BudgetTotals;

    #[test]
    fn test_totals_line() {
        let mut surface = MemorySurface::new();
        render_budget_totals(
            &mut surface,
            &BudgetTotals {
                income: Money::from_units(4200),
                fixed: Money::from_units(1500),
                variable: Money::zero(),
            },
            &CurrencyFormat::default(),
        );

        let text: String = totals_line(&surface)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "Income $4,200  │  Fixed $1,500  │  Variable $0");
    }
}
