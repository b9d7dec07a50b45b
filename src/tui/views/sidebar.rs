//! Navigation menu view
//!
//! A sidebar on wide terminals, a collapsible bar on narrow ones.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::nav::NavItem;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::inner;

/// Render the menu
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" finplan ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let inner = inner(area);
    if inner.height == 0 {
        return;
    }

    let header = if app.nav.is_mobile() {
        let arrow = if app.nav.is_menu_open() { "▾" } else { "▸" };
        format!("☰ Menu {}  [m]", arrow)
    } else {
        "Menu".to_string()
    };
    frame.render_widget(
        Line::styled(header, Style::default().fg(Color::Yellow)),
        Rect { height: 1, ..inner },
    );

    let items: Vec<ListItem> = app
        .nav
        .visible_items()
        .into_iter()
        .map(|item| ListItem::new(item_line(app, item)))
        .collect();
    if items.is_empty() {
        return;
    }

    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.nav_index));
    }
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn item_line(app: &App, item: NavItem) -> Line<'static> {
    let entries = app.nav.entries();
    match item {
        NavItem::Entry(i) => {
            let entry = &entries[i];
            let marker = if !entry.has_submenu() {
                " "
            } else if app.nav.shows_children(i) {
                "▾"
            } else {
                "▸"
            };
            Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(entry.label.clone(), Style::default().fg(Color::White)),
            ])
        }
        NavItem::Child(i, j) => {
            let label = entries[i].children[j].clone();
            let active = ActiveView::ALL
                .get(j)
                .is_some_and(|view| *view == app.active_view && i == 0);
            let style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if active { "▶" } else { " " };
            Line::from(vec![
                Span::styled(format!("  {} ", indicator), style),
                Span::styled(format!("[F{}] ", j + 1), Style::default().fg(Color::Yellow)),
                Span::styled(label, style),
            ])
        }
    }
}
