//! Calculator form state and field rendering
//!
//! A form is a list of text inputs backed by a [`MemorySurface`]: every edit
//! is copied into the surface field of the same id, and the calculator
//! results are rendered back into the surface's output regions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::surface::{FieldSpec, MemorySurface};
use crate::tui::widgets::TextInput;

/// Inputs and outputs of one calculator form
#[derive(Debug, Clone)]
pub struct FormState {
    pub specs: Vec<FieldSpec>,
    pub inputs: Vec<TextInput>,
    pub focused: usize,
    pub surface: MemorySurface,
}

impl FormState {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let inputs = specs
            .iter()
            .map(|spec| TextInput::new().label(spec.label.as_str()).placeholder("0"))
            .collect();
        Self {
            specs,
            inputs,
            focused: 0,
            surface: MemorySurface::new(),
        }
    }

    /// Id of the focused field
    pub fn focused_id(&self) -> Option<&str> {
        self.specs.get(self.focused).map(|s| s.id.as_str())
    }

    pub fn next_field(&mut self) {
        if !self.inputs.is_empty() {
            self.focused = (self.focused + 1) % self.inputs.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.inputs.is_empty() {
            self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
        }
    }

    /// Apply an edit to the focused input and copy it to the surface
    ///
    /// Returns whether the text changed.
    pub fn edit(&mut self, f: impl FnOnce(&mut TextInput)) -> bool {
        let Some(input) = self.inputs.get_mut(self.focused) else {
            return false;
        };
        let before = input.content.clone();
        f(input);
        let changed = input.content != before;
        if changed {
            let text = input.content.clone();
            let id = self.specs[self.focused].id.clone();
            self.surface.set_field(id, text);
        }
        changed
    }

    /// Empty every field and forget all results
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
        self.surface = MemorySurface::new();
        self.focused = 0;
    }
}

/// Render the inputs one per row, with `is_active` marking the focus
pub fn render_fields(frame: &mut Frame, form: &FormState, area: Rect, is_active: bool) {
    if form.inputs.is_empty() {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); form.inputs.len()])
        .split(area);

    for (i, (input, row)) in form.inputs.iter().zip(rows.iter()).enumerate() {
        let mut input = input.clone();
        input.focused = is_active && i == form.focused;
        frame.render_widget(&input, *row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{SavingsFields, Surface};

    #[test]
    fn test_edits_reach_surface() {
        let mut form = FormState::new(SavingsFields::default().specs());
        form.edit(|i| {
            i.insert('1');
            i.insert('2');
        });
        form.next_field();
        form.edit(|i| {
            i.insert('x');
        });

        assert_eq!(form.surface.read_field("goal"), 12.0);
        assert_eq!(form.surface.field_text("term"), None);
        assert_eq!(form.focused_id(), Some("term"));
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = FormState::new(SavingsFields::default().specs());
        form.prev_field();
        assert_eq!(form.focused, form.inputs.len() - 1);
        form.next_field();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::new(SavingsFields::default().specs());
        form.edit(|i| {
            i.insert('9');
        });
        form.reset();
        assert!(form.inputs[0].value().is_empty());
        assert_eq!(form.surface, MemorySurface::new());
    }
}
