//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::alert::AlertChannel;
use crate::config::Settings;
use crate::display::{
    render_budget_report, render_budget_totals, render_goal_report, render_savings_plan,
};
use crate::error::ValidationError;
use crate::nav::{MenuEntry, NavItem, NavigationMenu};
use crate::services::{BudgetEvaluator, GoalBudgetEvaluator, SavingsPlanner};
use crate::surface::{read_budget_input, read_goal_input, read_savings_input};

use super::views::form::FormState;

/// Menu entry holding the calculators
const CALCULATORS_ENTRY: usize = 0;
const HELP_ENTRY: usize = 1;
const QUIT_ENTRY: usize = 2;

fn menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::dropdown(
            "Calculators",
            &[
                ActiveView::Savings.title(),
                ActiveView::Budget.title(),
                ActiveView::Goal.title(),
            ],
        ),
        MenuEntry::link("Help"),
        MenuEntry::link("Quit"),
    ]
}

/// Which calculator is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Savings,
    Budget,
    Goal,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [Self::Savings, Self::Budget, Self::Goal];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Savings => "Savings planner",
            Self::Budget => "Monthly budget",
            Self::Goal => "Savings target",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_view: ActiveView,
    pub focused_panel: FocusedPanel,
    pub active_dialog: ActiveDialog,

    /// Navigation menu shown in the sidebar
    pub nav: NavigationMenu,

    /// Selected row among the menu's visible items
    pub nav_index: usize,

    /// Terminal size in columns and rows
    pub viewport: (u16, u16),

    pub savings: FormState,
    pub budget: FormState,
    pub goal: FormState,

    pub alerts: AlertChannel,

    /// Anchor for the savings timeline
    pub today: NaiveDate,
}

impl<'a> App<'a> {
    /// Create a new App instance for a terminal of the given size
    pub fn new(settings: &'a Settings, viewport: (u16, u16), today: NaiveDate) -> Self {
        let bindings = &settings.bindings;
        let mut app = Self {
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            nav: NavigationMenu::new(menu_entries(), settings.nav_breakpoint, viewport.0),
            nav_index: 0,
            viewport,
            savings: FormState::new(bindings.savings.specs()),
            budget: FormState::new(bindings.budget.specs()),
            goal: FormState::new(bindings.goal.specs()),
            alerts: AlertChannel::new(Duration::from_secs(settings.alert_duration_secs)),
            today,
        };
        app.refresh_totals();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a different calculator
    pub fn switch_view(&mut self, view: ActiveView) {
        debug!(view = view.title(), "switching view");
        self.active_view = view;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Form of the active calculator
    pub fn current_form(&self) -> &FormState {
        match self.active_view {
            ActiveView::Savings => &self.savings,
            ActiveView::Budget => &self.budget,
            ActiveView::Goal => &self.goal,
        }
    }

    pub fn current_form_mut(&mut self) -> &mut FormState {
        match self.active_view {
            ActiveView::Savings => &mut self.savings,
            ActiveView::Budget => &mut self.budget,
            ActiveView::Goal => &mut self.goal,
        }
    }

    /// Edit the focused field of the active form
    ///
    /// The budget's running totals follow every change.
    pub fn edit_field(&mut self, f: impl FnOnce(&mut super::widgets::TextInput)) {
        if self.current_form_mut().edit(f) && self.active_view == ActiveView::Budget {
            self.refresh_totals();
        }
    }

    /// Recompute the budget form's running totals
    pub fn refresh_totals(&mut self) {
        let input = read_budget_input(&self.budget.surface, &self.settings.bindings.budget);
        let totals = BudgetEvaluator::running_totals(&input);
        render_budget_totals(&mut self.budget.surface, &totals, &self.settings.currency);
    }

    /// Run the active calculator over its form
    ///
    /// On a validation failure the previous results stay on screen and the
    /// alert shows the reason.
    pub fn calculate(&mut self) {
        let settings = self.settings;
        let currency = &settings.currency;
        let bindings = &settings.bindings;

        let result = match self.active_view {
            ActiveView::Savings => {
                let input = read_savings_input(&self.savings.surface, &bindings.savings);
                SavingsPlanner::new(currency).plan(&input).map(|plan| {
                    render_savings_plan(&mut self.savings.surface, &plan, currency, self.today);
                })
            }
            ActiveView::Budget => {
                let input = read_budget_input(&self.budget.surface, &bindings.budget);
                BudgetEvaluator::new(currency).evaluate(&input).map(|report| {
                    render_budget_report(&mut self.budget.surface, &report, currency);
                })
            }
            ActiveView::Goal => {
                let input = read_goal_input(&self.goal.surface, &bindings.goal);
                GoalBudgetEvaluator::new(currency).evaluate(&input).map(|report| {
                    render_goal_report(&mut self.goal.surface, &report, currency);
                })
            }
        };

        match result {
            Ok(()) => {
                debug!(view = self.active_view.title(), "calculated");
                self.alerts.dismiss();
            }
            Err(e) => self.reject(&e),
        }
    }

    fn reject(&mut self, error: &ValidationError) {
        warn!(code = error.code(), view = self.active_view.title(), "input rejected");
        self.alerts.show_validation(error);
    }

    /// Clear the active form
    pub fn reset_form(&mut self) {
        self.current_form_mut().reset();
        if self.active_view == ActiveView::Budget {
            self.refresh_totals();
        }
    }

    /// The terminal was resized
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.nav.resize(width);
        self.clamp_nav_index();
    }

    /// Periodic housekeeping
    pub fn tick(&mut self, now: Instant) {
        if self.alerts.tick(now) {
            debug!("alert dismissed");
        }
    }

    /// Flip the collapsed menu
    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
        self.clamp_nav_index();
    }

    /// A click or Esc outside the menu
    pub fn click_outside(&mut self) {
        self.nav.click_outside();
        self.clamp_nav_index();
    }

    pub fn nav_up(&mut self) {
        self.nav_index = self.nav_index.saturating_sub(1);
    }

    pub fn nav_down(&mut self) {
        let len = self.nav.visible_items().len();
        if self.nav_index + 1 < len {
            self.nav_index += 1;
        }
    }

    /// Activate the selected menu row
    pub fn activate_nav(&mut self) {
        let items = self.nav.visible_items();
        let Some(item) = items.get(self.nav_index).copied() else {
            // Collapsed menu: Enter opens it
            self.toggle_menu();
            return;
        };

        match item {
            NavItem::Entry(i) if self.nav.entries()[i].has_submenu() => {
                self.nav.toggle_submenu(i);
            }
            NavItem::Entry(HELP_ENTRY) => {
                self.nav.follow_link();
                self.open_dialog(ActiveDialog::Help);
            }
            NavItem::Entry(QUIT_ENTRY) => self.quit(),
            NavItem::Entry(_) => self.nav.follow_link(),
            NavItem::Child(CALCULATORS_ENTRY, j) => {
                if let Some(view) = ActiveView::ALL.get(j) {
                    self.switch_view(*view);
                }
                self.nav.follow_link();
                self.focused_panel = FocusedPanel::Main;
            }
            NavItem::Child(..) => self.nav.follow_link(),
        }
        self.clamp_nav_index();
    }

    /// Select a menu row directly (mouse)
    pub fn select_nav(&mut self, index: usize) {
        if index < self.nav.visible_items().len() {
            self.nav_index = index;
            self.focused_panel = FocusedPanel::Sidebar;
            self.activate_nav();
        }
    }

    fn clamp_nav_index(&mut self) {
        let len = self.nav.visible_items().len();
        self.nav_index = self.nav_index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::regions;
    use crate::models::Tone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit_field(|i| {
                i.insert(c);
            });
        }
    }

    #[test]
    fn test_savings_calculation() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (120, 40), today());

        type_text(&mut app, "12000");
        app.current_form_mut().next_field();
        type_text(&mut app, "12");
        app.calculate();

        let surface = &app.savings.surface;
        assert_eq!(surface.text(regions::SAVINGS_MONTHLY), Some("$1,000"));
        assert!(surface.is_visible(regions::SAVINGS_RESULTS));
        assert!(!app.alerts.is_visible());
    }

    #[test]
    fn test_validation_shows_alert_and_keeps_results() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (120, 40), today());

        type_text(&mut app, "1000");
        app.current_form_mut().next_field();
        type_text(&mut app, "10");
        app.calculate();
        assert!(app.savings.surface.is_visible(regions::SAVINGS_RESULTS));

        // Term 0.5 is too short
        app.edit_field(|i| i.clear());
        type_text(&mut app, "0.5");
        app.calculate();

        let alert = app.alerts.current().unwrap();
        assert_eq!(alert.tone, Tone::Warning);
        assert_eq!(
            app.savings.surface.text(regions::SAVINGS_MONTHLY),
            Some("$100")
        );
    }

    #[test]
    fn test_budget_totals_follow_typing() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (120, 40), today());
        app.switch_view(ActiveView::Budget);

        assert_eq!(app.budget.surface.text(regions::BUDGET_TOTAL_INCOME), Some("$0"));
        type_text(&mut app, "2500");
        assert_eq!(
            app.budget.surface.text(regions::BUDGET_TOTAL_INCOME),
            Some("$2,500")
        );

        app.reset_form();
        assert_eq!(app.budget.surface.text(regions::BUDGET_TOTAL_INCOME), Some("$0"));
    }

    #[test]
    fn test_nav_on_desktop_switches_view() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (160, 40), today());

        // Calculators, its three children, Help, Quit
        assert_eq!(app.nav.visible_items().len(), 6);
        app.select_nav(2);
        assert_eq!(app.active_view, ActiveView::Budget);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_nav_on_mobile() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (80, 40), today());
        assert!(app.nav.visible_items().is_empty());

        app.focused_panel = FocusedPanel::Sidebar;
        app.activate_nav();
        assert!(app.nav.is_menu_open());

        // Open the calculators submenu and pick the goal check
        app.activate_nav();
        assert!(app.nav.is_submenu_open(0));
        app.nav_index = 3;
        app.activate_nav();

        assert_eq!(app.active_view, ActiveView::Goal);
        assert!(!app.nav.is_menu_open());
    }

    #[test]
    fn test_resize_past_breakpoint_closes_menu() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (80, 40), today());
        app.toggle_menu();
        app.resize(140, 40);
        assert!(!app.nav.is_menu_open());
        assert!(!app.nav.is_mobile());
    }

    #[test]
    fn test_alert_tick() {
        let settings = Settings::default();
        let mut app = App::new(&settings, (120, 40), today());
        app.calculate();
        let shown = app.alerts.current().unwrap().shown_at;

        app.tick(shown + Duration::from_secs(1));
        assert!(app.alerts.is_visible());
        app.tick(shown + Duration::from_secs(settings.alert_duration_secs));
        assert!(!app.alerts.is_visible());
    }
}
