//! Render calculator results onto a [`Surface`]
//!
//! This is the page-style presentation: named text regions, bar widths and
//! section visibility. Region identifiers are listed in [`regions`].

use chrono::NaiveDate;

use crate::models::{Advisory, CurrencyFormat};
use crate::services::{BudgetReport, BudgetTotals, GoalBudgetReport, GoalStatus, SavingsPlan};
use crate::surface::Surface;

use super::report::format_percentage;

/// Output region identifiers
pub mod regions {
    pub const SAVINGS_RESULTS: &str = "savings-results";
    pub const SAVINGS_GOAL: &str = "res-goal";
    pub const SAVINGS_SAVED: &str = "res-saved";
    pub const SAVINGS_REMAINING: &str = "res-remaining";
    pub const SAVINGS_MONTHLY: &str = "res-monthly";
    pub const SAVINGS_WEEKLY: &str = "res-weekly";
    pub const SAVINGS_TERM: &str = "res-term";
    pub const SAVINGS_START: &str = "res-start";
    pub const SAVINGS_END: &str = "res-end";
    pub const SAVINGS_TIMELINE_BAR: &str = "bar-timeline";
    pub const FEASIBILITY_SECTION: &str = "feasibility-section";
    pub const FEASIBILITY_CONTENT: &str = "feasibility-content";

    pub const BUDGET_TOTAL_INCOME: &str = "total-income";
    pub const BUDGET_TOTAL_FIXED: &str = "total-fixed";
    pub const BUDGET_TOTAL_VARIABLE: &str = "total-variable";
    pub const BUDGET_RESULTS: &str = "budget-results";
    pub const BUDGET_INCOME: &str = "res-income";
    pub const BUDGET_EXPENSES: &str = "res-expenses";
    pub const BUDGET_BALANCE: &str = "res-balance";
    pub const BUDGET_BALANCE_SIGN: &str = "res-balance-sign";
    pub const BUDGET_FIXED_PCT: &str = "pct-fixed";
    pub const BUDGET_VARIABLE_PCT: &str = "pct-variable";
    pub const BUDGET_DISPOSABLE_PCT: &str = "pct-disposable";
    pub const BUDGET_FIXED_AMOUNT: &str = "amount-fixed";
    pub const BUDGET_VARIABLE_AMOUNT: &str = "amount-variable";
    pub const BUDGET_DISPOSABLE_AMOUNT: &str = "amount-disposable";
    pub const BUDGET_FIXED_BAR: &str = "bar-fixed";
    pub const BUDGET_VARIABLE_BAR: &str = "bar-variable";
    pub const BUDGET_DISPOSABLE_BAR: &str = "bar-disposable";
    pub const BUDGET_RECOMMENDATIONS: &str = "recommendations-content";

    pub const GOAL_RESULTS: &str = "goal-results";
    pub const GOAL_INCOME: &str = "goal-res-income";
    pub const GOAL_EXPENSES: &str = "goal-res-expenses";
    pub const GOAL_EXPENSE_PCT: &str = "goal-res-expense-pct";
    pub const GOAL_EXPENSE_BAR: &str = "bar-goal-expenses";
    pub const GOAL_AVAILABLE: &str = "goal-res-available";
    pub const GOAL_STATUS: &str = "goal-res-status";
    pub const GOAL_ADVICE: &str = "goal-advice-content";
}

/// Plain-text block for a list of advisories, one per line
fn advisory_lines(advisories: &[Advisory]) -> String {
    advisories
        .iter()
        .map(|a| format!("{}|{}|{}", a.tone, a.title, a.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split an advisory region back into (tone, title, text)
pub fn parse_advisory_lines(block: &str) -> Vec<(&str, &str, &str)> {
    block
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(3, '|');
            Some((parts.next()?, parts.next()?, parts.next()?))
        })
        .collect()
}

/// Render a savings plan
pub fn render_savings_plan(
    surface: &mut dyn Surface,
    plan: &SavingsPlan,
    currency: &CurrencyFormat,
    start: NaiveDate,
) {
    use regions::*;

    surface.write_text(SAVINGS_GOAL, &currency.whole(plan.goal));
    surface.write_text(SAVINGS_SAVED, &currency.whole(plan.current_savings));
    surface.write_text(SAVINGS_REMAINING, &currency.whole(plan.remaining));
    surface.write_text(SAVINGS_MONTHLY, &currency.whole(plan.monthly_required));
    surface.write_text(SAVINGS_WEEKLY, &currency.whole(plan.weekly_required));
    surface.write_text(SAVINGS_TERM, &plan.term_label());

    let timeline = plan.timeline(start);
    surface.write_text(SAVINGS_START, &timeline.start_label());
    surface.write_text(SAVINGS_END, &timeline.end_label());
    surface.write_width(SAVINGS_TIMELINE_BAR, 100.0);

    match &plan.feasibility {
        Some(report) => {
            surface.write_text(FEASIBILITY_CONTENT, &advisory_lines(&report.advisories));
            surface.set_visible(FEASIBILITY_SECTION, true);
        }
        None => surface.set_visible(FEASIBILITY_SECTION, false),
    }

    surface.set_visible(SAVINGS_RESULTS, true);
}

/// Render the budget form's running totals
pub fn render_budget_totals(
    surface: &mut dyn Surface,
    totals: &BudgetTotals,
    currency: &CurrencyFormat,
) {
    surface.write_text(regions::BUDGET_TOTAL_INCOME, &currency.whole(totals.income));
    surface.write_text(regions::BUDGET_TOTAL_FIXED, &currency.whole(totals.fixed));
    surface.write_text(regions::BUDGET_TOTAL_VARIABLE, &currency.whole(totals.variable));
}

/// Render a budget report
pub fn render_budget_report(
    surface: &mut dyn Surface,
    report: &BudgetReport,
    currency: &CurrencyFormat,
) {
    use regions::*;

    surface.write_text(BUDGET_INCOME, &currency.whole(report.income));
    surface.write_text(BUDGET_EXPENSES, &currency.whole(report.total_expenses));
    surface.write_text(BUDGET_BALANCE, &currency.whole(report.balance));

    let sign = if report.balance.is_positive() {
        "positive"
    } else if report.balance.is_negative() {
        "negative"
    } else {
        "zero"
    };
    surface.write_text(BUDGET_BALANCE_SIGN, sign);

    surface.write_text(BUDGET_FIXED_PCT, &format_percentage(report.fixed_pct));
    surface.write_text(BUDGET_VARIABLE_PCT, &format_percentage(report.variable_pct));
    surface.write_text(BUDGET_DISPOSABLE_PCT, &format_percentage(report.disposable_pct));

    surface.write_text(BUDGET_FIXED_AMOUNT, &currency.whole(report.total_fixed));
    surface.write_text(BUDGET_VARIABLE_AMOUNT, &currency.whole(report.total_variable));
    surface.write_text(BUDGET_DISPOSABLE_AMOUNT, &currency.whole(report.disposable));

    surface.write_width(BUDGET_FIXED_BAR, report.fixed_bar());
    surface.write_width(BUDGET_VARIABLE_BAR, report.variable_bar());
    surface.write_width(BUDGET_DISPOSABLE_BAR, report.disposable_bar());

    surface.write_text(BUDGET_RECOMMENDATIONS, &advisory_lines(&report.advisories));
    surface.set_visible(BUDGET_RESULTS, true);
}

/// Render a goal budget report
pub fn render_goal_report(
    surface: &mut dyn Surface,
    report: &GoalBudgetReport,
    currency: &CurrencyFormat,
) {
    use regions::*;

    surface.write_text(GOAL_INCOME, &currency.exact(report.income));
    surface.write_text(GOAL_EXPENSES, &currency.exact(report.total_expenses));
    surface.write_text(GOAL_EXPENSE_PCT, &format_percentage(report.expense_pct));
    surface.write_width(GOAL_EXPENSE_BAR, report.expense_pct);
    surface.write_text(GOAL_AVAILABLE, &currency.exact(report.available));

    let status = match report.status {
        GoalStatus::NotViable { deficit } => {
            format!("Not viable: {} deficit", currency.exact(deficit))
        }
        GoalStatus::Tight { gap } => format!("Tight: {} short", currency.exact(gap)),
        GoalStatus::Healthy { surplus } => {
            format!("Healthy: {} surplus", currency.exact(surplus))
        }
    };
    surface.write_text(GOAL_STATUS, &status);
    surface.write_text(GOAL_ADVICE, &advisory_lines(&report.advisories));
    surface.set_visible(GOAL_RESULTS, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{BudgetEvaluator, GoalBudgetEvaluator, SavingsPlanner};
    use crate::surface::{read_budget_input, read_goal_input, read_savings_input};
    use crate::surface::{FieldBindings, MemorySurface};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    #[test]
    fn test_savings_round_trip_through_surface() {
        let bindings = FieldBindings::default();
        let fmt = CurrencyFormat::default();
        let mut surface = MemorySurface::new()
            .with_field("goal", "12000")
            .with_field("term", "12");

        let input = read_savings_input(&surface, &bindings.savings);
        let plan = SavingsPlanner::new(&fmt).plan(&input).unwrap();
        render_savings_plan(&mut surface, &plan, &fmt, start());

        assert_eq!(surface.text(regions::SAVINGS_MONTHLY), Some("$1,000"));
        assert_eq!(surface.text(regions::SAVINGS_WEEKLY), Some("$250"));
        assert_eq!(surface.text(regions::SAVINGS_END), Some("May 2027"));
        assert!(surface.is_visible(regions::SAVINGS_RESULTS));
        assert!(!surface.is_visible(regions::FEASIBILITY_SECTION));
    }

    #[test]
    fn test_budget_bars_and_recommendations() {
        let bindings = FieldBindings::default();
        let fmt = CurrencyFormat::default();
        let mut surface = MemorySurface::new()
            .with_field("salary", "10000")
            .with_field("rent", "6000")
            .with_field("food", "1000");

        let input = read_budget_input(&surface, &bindings.budget);
        let report = BudgetEvaluator::new(&fmt).evaluate(&input).unwrap();
        render_budget_report(&mut surface, &report, &fmt);

        assert_eq!(surface.width(regions::BUDGET_FIXED_BAR), Some(60.0));
        assert_eq!(surface.text(regions::BUDGET_DISPOSABLE_PCT), Some("30.0%"));
        assert_eq!(surface.text(regions::BUDGET_BALANCE_SIGN), Some("positive"));

        let block = surface.text(regions::BUDGET_RECOMMENDATIONS).unwrap();
        let parsed = parse_advisory_lines(block);
        assert_eq!(parsed[0].0, "success");
        assert!(parsed.iter().any(|(_, title, _)| *title == "High fixed expenses"));
    }

    #[test]
    fn test_goal_status_text() {
        let bindings = FieldBindings::default();
        let fmt = CurrencyFormat::default();
        let mut surface = MemorySurface::new()
            .with_field("goal-income", "5000")
            .with_field("expense-housing", "6000");

        let input = read_goal_input(&surface, &bindings.goal);
        let report = GoalBudgetEvaluator::new(&fmt).evaluate(&input).unwrap();
        render_goal_report(&mut surface, &report, &fmt);

        assert_eq!(
            surface.text(regions::GOAL_STATUS),
            Some("Not viable: $1,000.00 deficit")
        );
        assert_eq!(surface.width(regions::GOAL_EXPENSE_BAR), Some(100.0));
    }
}
