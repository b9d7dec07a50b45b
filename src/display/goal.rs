//! Goal budget display formatting

use crate::models::CurrencyFormat;
use crate::services::{GoalBudgetReport, GoalStatus};

use super::report::{field_line, format_advisories, format_percentage, format_title};

/// Format a goal budget report for terminal display
///
/// Amounts carry two decimals.
pub fn format_goal_report(report: &GoalBudgetReport, currency: &CurrencyFormat) -> String {
    let mut output = format_title("Savings Target Check");

    output.push_str(&field_line("Income", &currency.exact(report.income)));
    output.push_str(&field_line("Expenses", &currency.exact(report.total_expenses)));
    output.push_str(&field_line("Expense share", &format_percentage(report.expense_pct)));
    output.push_str(&field_line("Available", &currency.exact(report.available)));
    output.push_str(&field_line("Savings target", &currency.exact(report.savings_target)));

    let status = match report.status {
        GoalStatus::NotViable { deficit } => {
            format!("not viable (deficit {})", currency.exact(deficit))
        }
        GoalStatus::Tight { gap } => format!("tight (gap {})", currency.exact(gap)),
        GoalStatus::Healthy { surplus } => {
            format!("healthy (surplus {})", currency.exact(surplus))
        }
    };
    output.push_str(&field_line("Status", &status));
    output.push('\n');
    output.push_str(&format_advisories(&report.advisories));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalBudgetInput, LineItem, Money};
    use crate::services::GoalBudgetEvaluator;

    #[test]
    fn test_not_viable_report() {
        let fmt = CurrencyFormat::default();
        let report = GoalBudgetEvaluator::new(&fmt)
            .evaluate(&GoalBudgetInput {
                income: Money::from_units(5000),
                expenses: vec![LineItem::new("Rent", Money::from_units(6000))],
                savings_target: Money::zero(),
            })
            .unwrap();

        let output = format_goal_report(&report, &fmt);
        assert!(output.contains("not viable (deficit $1,000.00)"));
        assert!(output.contains("-$1,000.00"));
        assert!(output.contains("120.0%"));
    }
}
