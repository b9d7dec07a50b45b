//! Status bar view
//!
//! Shows the active calculator, the layout mode, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(status_spans(app, area.width));
    frame.render_widget(Paragraph::new(line), area);
}

fn status_spans(app: &App, width: u16) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.active_view.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];

    let mode = if app.nav.is_mobile() { "mobile" } else { "desktop" };
    spans.push(Span::styled(
        format!("{} {}", mode, app.viewport.0),
        Style::default().fg(Color::DarkGray),
    ));

    let form = app.current_form();
    if let Some(spec) = form.specs.get(form.focused) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(spec.label.clone(), Style::default().fg(Color::Yellow)));
    }

    let hints = " Enter:Calculate  Tab:Menu  ?:Help  q:Quit ";
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use chrono::NaiveDate;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_shows_mode() {
        let settings = Settings::default();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let app = App::new(&settings, (80, 24), today);
        let line = text(&status_spans(&app, 80));
        assert!(line.contains("Savings planner"));
        assert!(line.contains("mobile 80"));
        assert!(line.contains("Savings goal"));

        let app = App::new(&settings, (140, 40), today);
        assert!(text(&status_spans(&app, 140)).contains("desktop 140"));
    }
}
