//! Layout definitions for the TUI
//!
//! Wide terminals get a sidebar menu on the left; at or below the breakpoint
//! the menu collapses into a bar across the top.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::nav::NavigationMenu;

/// Sidebar width on wide terminals
const SIDEBAR_WIDTH: u16 = 28;

/// Layout regions for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Menu area (left sidebar or top bar)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

/// What a click on the menu hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    /// The header line holding the menu toggle
    Toggle,
    /// A visible menu row
    Item(usize),
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, nav: &NavigationMenu) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        if nav.is_mobile() {
            // Border, header line, one row per visible item
            let height = nav.visible_items().len() as u16 + 3;
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(height), Constraint::Min(3)])
                .split(vertical[0]);
            Self {
                sidebar: rows[0],
                main: rows[1],
                status_bar: vertical[1],
            }
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
                .split(vertical[0]);
            Self {
                sidebar: columns[0],
                main: columns[1],
                status_bar: vertical[1],
            }
        }
    }

    /// Map a click to a menu target, if it landed on one
    pub fn menu_hit(&self, column: u16, row: u16, item_count: usize) -> Option<MenuHit> {
        let inner = inner(self.sidebar);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        if row == inner.y {
            return Some(MenuHit::Toggle);
        }
        let index = (row - inner.y - 1) as usize;
        (index < item_count).then_some(MenuHit::Item(index))
    }
}

/// Area inside a full border
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Layout for a calculator view: inputs above, results below
pub struct FormLayout {
    pub fields: Rect,
    pub results: Rect,
}

impl FormLayout {
    /// `field_rows` lines are reserved for inputs (plus the border)
    pub fn new(area: Rect, field_rows: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(field_rows + 2), Constraint::Min(3)])
            .split(area);

        Self {
            fields: chunks[0],
            results: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for an alert toast in the top-right corner of `r`
pub fn toast_rect(r: Rect) -> Rect {
    let width = 48.min(r.width);
    let height = 5.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
