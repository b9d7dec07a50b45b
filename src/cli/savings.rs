//! Savings planner command

use std::io::Write;

use chrono::NaiveDate;
use clap::Args;
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::format_savings_plan;
use crate::error::FinplanResult;
use crate::export::ResultExport;
use crate::services::SavingsPlanner;
use crate::surface::{read_savings_input, MemorySurface};

use super::{fill, write_structured, OutputFormat};

/// Arguments of `finplan savings`
#[derive(Args, Debug, Clone, Default)]
pub struct SavingsArgs {
    /// Savings goal (e.g. "12000" or "$12,000")
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Term in months
    #[arg(short, long)]
    pub term: Option<String>,

    /// Amount already saved
    #[arg(short, long)]
    pub current: Option<String>,

    /// Monthly income, enables the feasibility check
    #[arg(short, long)]
    pub income: Option<String>,

    /// Monthly expenses, enables the feasibility check
    #[arg(short, long)]
    pub expenses: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Handle `finplan savings`
///
/// `today` anchors the timeline.
pub fn handle_savings_command<W: Write>(
    settings: &Settings,
    args: &SavingsArgs,
    today: NaiveDate,
    out: &mut W,
) -> FinplanResult<()> {
    let fields = &settings.bindings.savings;
    let mut surface = MemorySurface::new();
    fill(&mut surface, &fields.goal, &args.goal);
    fill(&mut surface, &fields.term, &args.term);
    fill(&mut surface, &fields.current_savings, &args.current);
    fill(&mut surface, &fields.monthly_income, &args.income);
    fill(&mut surface, &fields.monthly_expenses, &args.expenses);

    let input = read_savings_input(&surface, fields);
    info!(goal = input.goal.cents(), term = input.term_months, "planning savings");

    let plan = SavingsPlanner::new(&settings.currency)
        .plan(&input)
        .inspect_err(|e| warn!(code = e.code(), "savings input rejected"))?;

    match args.format {
        OutputFormat::Text => {
            write!(out, "{}", format_savings_plan(&plan, &settings.currency, today))?;
        }
        format => write_structured(&ResultExport::savings(&plan), format, out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FinplanError, ValidationError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn run(args: SavingsArgs) -> FinplanResult<String> {
        let mut out = Vec::new();
        handle_savings_command(&Settings::default(), &args, today(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output() {
        let output = run(SavingsArgs {
            goal: Some("$12,000".into()),
            term: Some("12".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(output.contains("$1,000"));
        assert!(output.contains("$250"));
        assert!(output.contains("March 2026 -> March 2027"));
    }

    #[test]
    fn test_json_output() {
        let output = run(SavingsArgs {
            goal: Some("12000".into()),
            term: Some("12".into()),
            income: Some("10000".into()),
            expenses: Some("5000".into()),
            format: OutputFormat::Json,
            ..Default::default()
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["kind"], "savings_plan");
        assert_eq!(value["result"]["feasibility"]["outcome"], "very_easy");
    }

    #[test]
    fn test_invalid_text_reads_as_zero() {
        let err = run(SavingsArgs {
            goal: Some("lots".into()),
            term: Some("12".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(
            err,
            FinplanError::Validation(ValidationError::MissingGoal)
        ));
    }

    #[test]
    fn test_goal_already_met() {
        let err = run(SavingsArgs {
            goal: Some("1000".into()),
            term: Some("6".into()),
            current: Some("1500".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(err.as_validation(), Some(&ValidationError::GoalAlreadyMet));
    }
}
