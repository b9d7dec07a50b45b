//! Budget report display formatting
//!
//! The breakdown table is rendered with `tabled`; recommendations follow
//! as plain text.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::CurrencyFormat;
use crate::services::BudgetReport;

use super::report::{field_line, format_advisories, format_bar, format_percentage, format_title};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Section")]
    section: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the breakdown table of a budget report
pub fn format_breakdown_table(report: &BudgetReport, currency: &CurrencyFormat) -> String {
    let rows = vec![
        BreakdownRow {
            section: "Fixed expenses",
            amount: currency.whole(report.total_fixed),
            share: format_percentage(report.fixed_pct),
            bar: format_bar(report.fixed_bar(), BAR_WIDTH),
        },
        BreakdownRow {
            section: "Variable expenses",
            amount: currency.whole(report.total_variable),
            share: format_percentage(report.variable_pct),
            bar: format_bar(report.variable_bar(), BAR_WIDTH),
        },
        BreakdownRow {
            section: "Available",
            amount: currency.whole(report.disposable),
            share: format_percentage(report.disposable_pct),
            bar: format_bar(report.disposable_bar(), BAR_WIDTH),
        },
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()));
    table.to_string()
}

/// Format a budget report for terminal display
pub fn format_budget_report(report: &BudgetReport, currency: &CurrencyFormat) -> String {
    let mut output = format_title("Monthly Budget");

    output.push_str(&field_line("Income", &currency.whole(report.income)));
    output.push_str(&field_line("Expenses", &currency.whole(report.total_expenses)));
    output.push_str(&field_line("Balance", &currency.whole(report.balance)));
    output.push_str(&field_line("Status", report.state.label()));
    output.push('\n');

    output.push_str(&format_breakdown_table(report, currency));
    output.push_str("\n\nRecommendations\n");
    output.push_str(&format_advisories(&report.advisories));

    output
}
