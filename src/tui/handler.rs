//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::event::Event;
use super::layout::{AppLayout, MenuHit};
use super::widgets::input::is_amount_char;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(width, height) => app.resize(width, height),
        Event::Tick => app.tick(Instant::now()),
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('u') => app.edit_field(|input| input.clear()),
            KeyCode::Char('r') => app.reset_form(),
            _ => {}
        }
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Esc => {
            app.click_outside();
            app.alerts.dismiss();
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_panel_focus();
            return;
        }
        KeyCode::F(n @ 1..=3) => {
            app.switch_view(ActiveView::ALL[usize::from(n) - 1]);
            return;
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_form_key(app, key),
    }
}

/// Handle keys when the menu is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_nav(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            app.switch_view(ActiveView::ALL[index]);
        }
        KeyCode::Right | KeyCode::Char('l') => app.focused_panel = FocusedPanel::Main,
        _ => {}
    }
}

/// Handle keys when a calculator form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.calculate(),
        KeyCode::Down => app.current_form_mut().next_field(),
        KeyCode::Up => app.current_form_mut().prev_field(),
        KeyCode::Left => app.edit_field(|input| input.move_left()),
        KeyCode::Right => app.edit_field(|input| input.move_right()),
        KeyCode::Home => app.edit_field(|input| input.move_start()),
        KeyCode::End => app.edit_field(|input| input.move_end()),
        KeyCode::Backspace => app.edit_field(|input| input.backspace()),
        KeyCode::Delete => app.edit_field(|input| input.delete()),
        KeyCode::Char(c) if is_amount_char(c) => app.edit_field(|input| {
            input.insert(c);
        }),
        _ => {}
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
}

/// Handle a mouse event
///
/// Left clicks on the menu select rows; clicks anywhere else count as
/// clicking outside the menu.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    let (width, height) = app.viewport;
    let layout = AppLayout::new(Rect::new(0, 0, width, height), &app.nav);
    let item_count = app.nav.visible_items().len();

    match layout.menu_hit(mouse.column, mouse.row, item_count) {
        Some(MenuHit::Toggle) => {
            app.focused_panel = FocusedPanel::Sidebar;
            app.toggle_menu();
        }
        Some(MenuHit::Item(index)) => app.select_nav(index),
        None => {
            app.click_outside();
            if layout.main.contains((mouse.column, mouse.row).into()) {
                app.focused_panel = FocusedPanel::Main;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::display::regions;
    use chrono::NaiveDate;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app(settings: &Settings, width: u16) -> App<'_> {
        App::new(settings, (width, 40), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    }

    #[test]
    fn test_keyboard_calculation() {
        let settings = Settings::default();
        let mut app = app(&settings, 120);

        type_text(&mut app, "12000");
        handle_event(&mut app, key(KeyCode::Down)).unwrap();
        type_text(&mut app, "12");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(
            app.savings.surface.text(regions::SAVINGS_WEEKLY),
            Some("$250")
        );
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = app(&settings, 120);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_dialog() {
        let settings = Settings::default();
        let mut app = app(&settings, 120);
        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        // Typing is ignored while the dialog is open
        handle_event(&mut app, key(KeyCode::Char('5'))).unwrap();
        assert!(app.savings.inputs[0].value().is_empty());

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_function_keys_switch_view() {
        let settings = Settings::default();
        let mut app = app(&settings, 120);
        handle_event(&mut app, key(KeyCode::F(3))).unwrap();
        assert_eq!(app.active_view, ActiveView::Goal);
    }

    #[test]
    fn test_resize_event_updates_menu() {
        let settings = Settings::default();
        let mut app = app(&settings, 80);
        app.toggle_menu();
        handle_event(&mut app, Event::Resize(150, 40)).unwrap();
        assert!(!app.nav.is_menu_open());
        assert_eq!(app.viewport, (150, 40));
    }

    #[test]
    fn test_click_outside_closes_mobile_menu() {
        let settings = Settings::default();
        let mut app = app(&settings, 80);

        // Header line of the top bar toggles the menu
        handle_event(&mut app, click(2, 1)).unwrap();
        assert!(app.nav.is_menu_open());

        handle_event(&mut app, click(40, 30)).unwrap();
        assert!(!app.nav.is_menu_open());
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_click_menu_item_on_desktop() {
        let settings = Settings::default();
        let mut app = app(&settings, 120);

        // Rows: header, Calculators, Savings planner, Monthly budget
        handle_event(&mut app, click(3, 4)).unwrap();
        assert_eq!(app.active_view, ActiveView::Budget);
    }
}
