//! Savings plan display formatting

use chrono::NaiveDate;

use crate::models::CurrencyFormat;
use crate::services::SavingsPlan;

use super::report::{field_line, format_advisories, format_title, separator};

/// Format a savings plan for terminal display
///
/// `start` anchors the timeline (normally today).
pub fn format_savings_plan(plan: &SavingsPlan, currency: &CurrencyFormat, start: NaiveDate) -> String {
    let mut output = format_title("Savings Plan");

    output.push_str(&field_line("Goal", &currency.whole(plan.goal)));
    output.push_str(&field_line("Already saved", &currency.whole(plan.current_savings)));
    output.push_str(&field_line("Still to save", &currency.whole(plan.remaining)));
    output.push_str(&field_line("Monthly savings", &currency.whole(plan.monthly_required)));
    output.push_str(&field_line("Weekly savings", &currency.whole(plan.weekly_required)));

    let timeline = plan.timeline(start);
    output.push_str(&field_line("Term", &plan.term_label()));
    output.push_str(&field_line(
        "Timeline",
        &format!("{} -> {}", timeline.start_label(), timeline.end_label()),
    ));

    if let Some(report) = &plan.feasibility {
        output.push('\n');
        output.push_str(&format!("Feasibility: {}\n", report.outcome.label()));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format_advisories(&report.advisories));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsInput};
    use crate::services::SavingsPlanner;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    #[test]
    fn test_plan_without_feasibility() {
        let fmt = CurrencyFormat::default();
        let plan = SavingsPlanner::new(&fmt)
            .plan(&SavingsInput {
                goal: Money::from_units(12000),
                term_months: 12.0,
                ..Default::default()
            })
            .unwrap();

        let output = format_savings_plan(&plan, &fmt, start());
        assert!(output.contains("Savings Plan"));
        assert!(output.contains("$1,000"));
        assert!(output.contains("$250"));
        assert!(output.contains("January 2026 -> January 2027"));
        assert!(!output.contains("Feasibility"));
    }

    #[test]
    fn test_plan_with_feasibility() {
        let fmt = CurrencyFormat::default();
        let plan = SavingsPlanner::new(&fmt)
            .plan(&SavingsInput {
                goal: Money::from_units(12000),
                term_months: 12.0,
                current_savings: Money::zero(),
                monthly_income: Money::from_units(10000),
                monthly_expenses: Money::from_units(9400),
            })
            .unwrap();

        let output = format_savings_plan(&plan, &fmt, start());
        assert!(output.contains("Feasibility: difficult"));
        assert!(output.contains("Goal hard to reach"));
        assert!(output.contains("Your current capacity"));
    }
}
