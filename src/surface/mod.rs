//! Form surface abstraction
//!
//! The calculators never touch a concrete UI. They read numbers from, and
//! renderers write results to, a [`Surface`]: a set of named input fields
//! and named output regions. The CLI and the TUI both use
//! [`MemorySurface`]; tests can use it directly.

pub mod bindings;
pub mod parse;
pub mod readers;

use std::collections::BTreeMap;

pub use bindings::{BudgetFields, FieldBindings, FieldSpec, GoalFields, SavingsFields};
pub use parse::{parse_field, MAX_FIELD_VALUE};
pub use readers::{read_budget_input, read_goal_input, read_savings_input};

/// Named input fields and output regions of a form
pub trait Surface {
    /// Numeric value of an input field; 0 when empty, missing or invalid
    fn read_field(&self, id: &str) -> f64;

    /// Replace the text content of an output region
    fn write_text(&mut self, id: &str, text: &str);

    /// Set the width (percent, 0-100) of a bar
    fn write_width(&mut self, id: &str, percent: f64);

    /// Show or hide a region
    fn set_visible(&mut self, id: &str, visible: bool);
}

/// In-memory surface
///
/// Input fields hold raw text exactly as typed; outputs are kept in ordered
/// maps so their contents are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    fields: BTreeMap<String, String>,
    texts: BTreeMap<String, String>,
    widths: BTreeMap<String, f64>,
    visible: BTreeMap<String, bool>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw text of an input field
    pub fn set_field(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.fields.insert(id.into(), text.into());
    }

    /// Builder-style [`set_field`](Self::set_field)
    pub fn with_field(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.set_field(id, text);
        self
    }

    /// Raw text of an input field
    pub fn field_text(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }

    /// Text last written to an output region
    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    /// Width last written to a bar
    pub fn width(&self, id: &str) -> Option<f64> {
        self.widths.get(id).copied()
    }

    /// Whether a region is visible; regions start hidden
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Forget all outputs, keeping the input fields
    pub fn clear_outputs(&mut self) {
        self.texts.clear();
        self.widths.clear();
        self.visible.clear();
    }
}

impl Surface for MemorySurface {
    fn read_field(&self, id: &str) -> f64 {
        self.fields.get(id).map(|t| parse_field(t)).unwrap_or(0.0)
    }

    fn write_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }

    fn write_width(&mut self, id: &str, percent: f64) {
        self.widths.insert(id.to_string(), percent.clamp(0.0, 100.0));
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        self.visible.insert(id.to_string(), visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_field() {
        let surface = MemorySurface::new()
            .with_field("goal", "12000")
            .with_field("term", "twelve");

        assert_eq!(surface.read_field("goal"), 12000.0);
        assert_eq!(surface.read_field("term"), 0.0);
        assert_eq!(surface.read_field("missing"), 0.0);
        assert_eq!(surface.field_text("term"), Some("twelve"));
    }

    #[test]
    fn test_outputs() {
        let mut surface = MemorySurface::new();
        assert!(!surface.is_visible("results"));

        surface.write_text("res-goal", "$12,000");
        surface.write_width("bar-fixed", 140.0);
        surface.set_visible("results", true);

        assert_eq!(surface.text("res-goal"), Some("$12,000"));
        assert_eq!(surface.width("bar-fixed"), Some(100.0));
        assert!(surface.is_visible("results"));

        surface.clear_outputs();
        assert_eq!(surface.text("res-goal"), None);
        assert!(!surface.is_visible("results"));
    }
}
