//! CLI command handlers
//!
//! Each calculator command copies its arguments, as typed, into the input
//! fields of a [`MemorySurface`](crate::surface::MemorySurface). The same
//! readers the TUI uses then turn the fields into calculator input, so
//! invalid text reads as 0 on both front ends.

pub mod budget;
pub mod goal;
pub mod savings;

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::FinplanResult;
use crate::export::{export_json, export_yaml, ResultExport};
use crate::surface::MemorySurface;

pub use budget::{handle_budget_command, BudgetArgs};
pub use goal::{handle_goal_command, GoalArgs};
pub use savings::{handle_savings_command, SavingsArgs};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON result envelope
    Json,
    /// YAML result envelope
    Yaml,
}

/// Copy an optional argument into an input field
fn fill(surface: &mut MemorySurface, id: &str, value: &Option<String>) {
    if let Some(text) = value {
        surface.set_field(id, text.as_str());
    }
}

/// Write a result in a structured format
fn write_structured<W: Write, T: Serialize>(
    export: &ResultExport<'_, T>,
    format: OutputFormat,
    out: &mut W,
) -> FinplanResult<()> {
    match format {
        OutputFormat::Json => export_json(export, out, true),
        OutputFormat::Yaml => export_yaml(export, out),
        OutputFormat::Text => Ok(()),
    }
}
