//! Responsive navigation menu state
//!
//! Tracks whether the menu and each entry's submenu are open. Below or at the
//! breakpoint the menu is collapsed behind a toggle and submenus open on
//! demand, one at a time; above it everything is laid out and the toggled
//! state is reset.

use tracing::trace;

/// A top-level menu entry with optional children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub children: Vec<String>,
}

impl MenuEntry {
    /// A plain link
    pub fn link(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// An entry that opens a submenu
    pub fn dropdown(label: impl Into<String>, children: &[&str]) -> Self {
        Self {
            label: label.into(),
            children: children.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn has_submenu(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A row the menu currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Entry(usize),
    Child(usize, usize),
}

/// Open/closed state of a responsive menu
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    entries: Vec<MenuEntry>,
    menu_open: bool,
    submenu_open: Vec<bool>,
    viewport_width: u16,
    breakpoint: u16,
}

impl NavigationMenu {
    /// Create a closed menu
    pub fn new(entries: Vec<MenuEntry>, breakpoint: u16, viewport_width: u16) -> Self {
        let submenu_open = vec![false; entries.len()];
        Self {
            entries,
            menu_open: false,
            submenu_open,
            viewport_width,
            breakpoint,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Whether the viewport is at or below the breakpoint
    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.breakpoint
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_submenu_open(&self, index: usize) -> bool {
        self.submenu_open.get(index).copied().unwrap_or(false)
    }

    /// Whether the entries should be drawn at all
    pub fn is_expanded(&self) -> bool {
        !self.is_mobile() || self.menu_open
    }

    /// Whether an entry's children should be drawn
    pub fn shows_children(&self, index: usize) -> bool {
        !self.is_mobile() || self.is_submenu_open(index)
    }

    /// Rows to draw, in order
    pub fn visible_items(&self) -> Vec<NavItem> {
        if !self.is_expanded() {
            return Vec::new();
        }
        let mut items = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            items.push(NavItem::Entry(i));
            if self.shows_children(i) {
                items.extend((0..entry.children.len()).map(|j| NavItem::Child(i, j)));
            }
        }
        items
    }

    /// Flip the menu toggle
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        trace!(open = self.menu_open, "toggled menu");
    }

    /// Flip one entry's submenu, closing all others
    ///
    /// Only acts in mobile mode and on entries that have children; returns
    /// whether anything changed.
    pub fn toggle_submenu(&mut self, index: usize) -> bool {
        if !self.is_mobile() || !self.entries.get(index).is_some_and(MenuEntry::has_submenu) {
            return false;
        }
        let open = !self.submenu_open[index];
        for (i, state) in self.submenu_open.iter_mut().enumerate() {
            *state = i == index && open;
        }
        true
    }

    /// A link was followed; in mobile mode the menu closes
    pub fn follow_link(&mut self) {
        if self.is_mobile() {
            self.menu_open = false;
        }
    }

    /// A click landed outside the menu; in mobile mode everything closes
    pub fn click_outside(&mut self) {
        if self.is_mobile() {
            self.close_all();
        }
    }

    /// The viewport changed width; growing past the breakpoint resets the menu
    pub fn resize(&mut self, width: u16) {
        self.viewport_width = width;
        if !self.is_mobile() {
            self.close_all();
        }
    }

    /// Close the menu and every submenu
    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.submenu_open.iter_mut().for_each(|s| *s = false);
    }
}
