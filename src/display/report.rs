//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the calculator reports.

use crate::models::Advisory;

/// Format a percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation of a 0-100 percentage
pub fn format_bar(percent: f64, width: usize) -> String {
    if percent <= 0.0 || !percent.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((percent.min(100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a title with an underline
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, double_separator(title.chars().count()))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Format a `label: value` line with the value column aligned
pub fn field_line(label: &str, value: &str) -> String {
    format!("{:<20} {}\n", format!("{}:", label), value)
}

/// Format a list of advisories, one titled block each
pub fn format_advisories(advisories: &[Advisory]) -> String {
    let mut output = String::new();
    for advisory in advisories {
        output.push_str(&format!(
            " [{}] {}\n     {}\n",
            advisory.tone.icon(),
            advisory.title,
            advisory.text
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.55), "5.5%");
        assert_eq!(format_percentage(60.0), "60.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(250.0, 4), "████");
        assert_eq!(format_bar(0.0, 3), "░░░");
    }

    #[test]
    fn test_field_line_alignment() {
        assert_eq!(field_line("Goal", "$1"), format!("{:<20} $1\n", "Goal:"));
    }

    #[test]
    fn test_format_advisories() {
        let text = format_advisories(&[Advisory::warning("Low savings", "Only 5.0%.")]);
        assert_eq!(text, " [!] Low savings\n     Only 5.0%.\n");
    }
}
