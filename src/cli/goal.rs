//! Savings target command

use std::io::Write;

use clap::Args;
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::format_goal_report;
use crate::error::FinplanResult;
use crate::export::ResultExport;
use crate::services::GoalBudgetEvaluator;
use crate::surface::{read_goal_input, FieldSpec, MemorySurface};

use super::{fill, write_structured, OutputFormat};

/// Arguments of `finplan goal`
#[derive(Args, Debug, Clone, Default)]
pub struct GoalArgs {
    /// Monthly income
    #[arg(short, long)]
    pub income: Option<String>,

    /// Monthly savings target
    #[arg(short, long)]
    pub target: Option<String>,

    /// Housing
    #[arg(long)]
    pub housing: Option<String>,

    /// Food
    #[arg(long)]
    pub food: Option<String>,

    /// Transport
    #[arg(long)]
    pub transport: Option<String>,

    /// Services
    #[arg(long)]
    pub services: Option<String>,

    /// Other expenses
    #[arg(long)]
    pub other: Option<String>,

    /// Additional expense amounts (repeatable)
    #[arg(short, long = "expense", value_name = "AMOUNT")]
    pub expenses: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl GoalArgs {
    fn named(&self) -> [&Option<String>; 5] {
        [
            &self.housing,
            &self.food,
            &self.transport,
            &self.services,
            &self.other,
        ]
    }
}

/// Handle `finplan goal`
pub fn handle_goal_command<W: Write>(
    settings: &Settings,
    args: &GoalArgs,
    out: &mut W,
) -> FinplanResult<()> {
    let mut fields = settings.bindings.goal.clone();
    let mut surface = MemorySurface::new();

    fill(&mut surface, &fields.income, &args.income);
    fill(&mut surface, &fields.savings_target, &args.target);
    for (spec, value) in fields.expenses.iter().zip(args.named()) {
        fill(&mut surface, &spec.id, value);
    }

    for (i, amount) in args.expenses.iter().enumerate() {
        let spec = FieldSpec::new(format!("goal-extra-{}", i + 1), format!("Expense {}", i + 1));
        surface.set_field(spec.id.as_str(), amount.as_str());
        fields.expenses.push(spec);
    }

    let input = read_goal_input(&surface, &fields);
    info!(
        income = input.income.cents(),
        expenses = input.expenses.len(),
        "checking savings target"
    );

    let report = GoalBudgetEvaluator::new(&settings.currency)
        .evaluate(&input)
        .inspect_err(|e| warn!(code = e.code(), "goal input rejected"))?;

    match args.format {
        OutputFormat::Text => {
            write!(out, "{}", format_goal_report(&report, &settings.currency))?;
        }
        format => write_structured(&ResultExport::goal(&report), format, out)?,
    }

    Ok(())
}
