//! Monthly budget command
//!
//! Evaluates a budget built from the named income and expense fields, and
//! optionally writes the breakdown to CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::format_budget_report;
use crate::error::{FinplanError, FinplanResult};
use crate::export::{export_budget_csv, ResultExport};
use crate::services::BudgetEvaluator;
use crate::surface::{read_budget_input, MemorySurface};

use super::{fill, write_structured, OutputFormat};

/// Arguments of `finplan budget`
///
/// Arguments map onto the configured budget fields in section order.
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Salary
    #[arg(long)]
    pub salary: Option<String>,

    /// Other income
    #[arg(long)]
    pub other_income: Option<String>,

    /// Rent or mortgage
    #[arg(long)]
    pub rent: Option<String>,

    /// Utilities
    #[arg(long)]
    pub utilities: Option<String>,

    /// Transport
    #[arg(long)]
    pub transport: Option<String>,

    /// Insurance
    #[arg(long)]
    pub insurance: Option<String>,

    /// Food
    #[arg(long)]
    pub food: Option<String>,

    /// Entertainment
    #[arg(long)]
    pub entertainment: Option<String>,

    /// Personal spending
    #[arg(long)]
    pub personal: Option<String>,

    /// Other expenses
    #[arg(long)]
    pub other: Option<String>,

    /// Monthly savings target
    #[arg(long)]
    pub target: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also export the breakdown to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl BudgetArgs {
    fn income(&self) -> [&Option<String>; 2] {
        [&self.salary, &self.other_income]
    }

    fn fixed(&self) -> [&Option<String>; 4] {
        [&self.rent, &self.utilities, &self.transport, &self.insurance]
    }

    fn variable(&self) -> [&Option<String>; 4] {
        [&self.food, &self.entertainment, &self.personal, &self.other]
    }
}

/// Handle `finplan budget`
pub fn handle_budget_command<W: Write>(
    settings: &Settings,
    args: &BudgetArgs,
    out: &mut W,
) -> FinplanResult<()> {
    let fields = &settings.bindings.budget;
    let mut surface = MemorySurface::new();

    for (spec, value) in fields.income.iter().zip(args.income()) {
        fill(&mut surface, &spec.id, value);
    }
    for (spec, value) in fields.fixed.iter().zip(args.fixed()) {
        fill(&mut surface, &spec.id, value);
    }
    for (spec, value) in fields.variable.iter().zip(args.variable()) {
        fill(&mut surface, &spec.id, value);
    }
    fill(&mut surface, &fields.savings_target, &args.target);

    let input = read_budget_input(&surface, fields);
    info!(income = input.total_income().cents(), "evaluating budget");

    let report = BudgetEvaluator::new(&settings.currency)
        .evaluate(&input)
        .inspect_err(|e| warn!(code = e.code(), "budget input rejected"))?;

    match args.format {
        OutputFormat::Text => {
            writeln!(out, "{}", format_budget_report(&report, &settings.currency))?;
        }
        format => write_structured(&ResultExport::budget(&report), format, out)?,
    }

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|e| {
            FinplanError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export_budget_csv(&input, &report, &mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), "budget exported");
        if args.format == OutputFormat::Text {
            writeln!(out, "Budget exported to: {}", path.display())?;
        }
    }

    Ok(())
}
